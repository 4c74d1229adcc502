use roster::validate::{valid_count, valid_name};

use crate::{api::Api, notify::Notifier};

/// The two fields of the invitation form, held as the raw strings a user
/// would type.
#[derive(Debug, Default)]
pub struct Form {
    pub name: String,
    pub people: String,
}

impl Form {
    pub fn new(name: impl Into<String>, people: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            people: people.into(),
        }
    }

    /// The submission flow: local checks first, and only a valid form ever
    /// reaches the network. Fields are cleared once the backend has
    /// acknowledged the write, and kept for correction otherwise.
    pub async fn submit(&mut self, api: &Api, notifier: &Notifier) -> bool {
        if !valid_name(&self.name) {
            notifier.error("El nombre debe tener entre 2 y 50 caracteres.");
            return false;
        }

        if !valid_count(&self.people) {
            notifier.error("Indica un número de personas entre 1 y 20.");
            return false;
        }

        match api.confirm(&self.name, &self.people).await {
            Ok(confirmation) => {
                notifier.ok("¡Asistencia confirmada! Nos vemos en la noche más espeluznante 🎃");

                println!(
                    "  {} viene con {} persona(s).",
                    confirmation.data.name, confirmation.data.people_count
                );

                self.name.clear();
                self.people.clear();

                true
            }
            Err(e) => {
                eprintln!("{e}");
                notifier.error("Error al confirmar asistencia. Intenta nuevamente.");

                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Form;
    use crate::{api::Api, notify::Notifier};

    // Nothing listens here; a validation failure must return before any
    // request is attempted, so these tests never touch the socket.
    fn dead_api() -> Api {
        Api::new("http://127.0.0.1:9")
    }

    #[tokio::test]
    async fn invalid_name_never_reaches_the_network() {
        let notifier = Notifier::new();
        let mut form = Form::new("A", "3");

        assert!(!form.submit(&dead_api(), &notifier).await);

        // Fields are kept for correction.
        assert_eq!(form.name, "A");
        assert_eq!(form.people, "3");

        let toast = notifier.current().unwrap();
        assert!(toast.message.contains("nombre"));
    }

    #[tokio::test]
    async fn invalid_count_never_reaches_the_network() {
        let notifier = Notifier::new();
        let mut form = Form::new("Ana Romero", "-1");

        assert!(!form.submit(&dead_api(), &notifier).await);
        assert_eq!(form.people, "-1");

        let toast = notifier.current().unwrap();
        assert!(toast.message.contains("personas"));
    }

    #[tokio::test]
    async fn network_failure_keeps_the_fields() {
        let notifier = Notifier::new();
        let mut form = Form::new("Ana Romero", "3");

        // Valid form, dead endpoint: the flow surfaces an error toast and
        // leaves the fields alone so the user can resubmit.
        assert!(!form.submit(&dead_api(), &notifier).await);
        assert_eq!(form.name, "Ana Romero");

        let toast = notifier.current().unwrap();
        assert!(toast.message.contains("confirmar"));
    }
}
