use anyhow::{Error, bail};
use reqwest::Client;
use roster::{Confirmation, Failure, GuestList, Rsvp};

/// Thin wrapper over the two backend endpoints.
pub struct Api {
    http: Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `GET /api/confirm`. The count travels as a raw string, exactly as the
    /// form field holds it; the server owns the defaulting rule.
    pub async fn confirm(&self, name: &str, people: &str) -> Result<Confirmation, Error> {
        let response = self
            .http
            .get(format!("{}/api/confirm", self.base_url))
            .query(&[("name", name), ("peopleCount", people)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            match response.json::<Failure>().await {
                Ok(Failure {
                    message,
                    error: Some(detail),
                }) => bail!("{message}: {detail}"),
                Ok(Failure { message, .. }) => bail!("{message}"),
                Err(_) => bail!("Request failed with status {status}"),
            }
        }

        Ok(response.json().await?)
    }

    /// `GET /api/get-list`.
    pub async fn get_list(&self) -> Result<Vec<Rsvp>, Error> {
        let response = self
            .http
            .get(format!("{}/api/get-list", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("Error al cargar los datos");
        }

        let list: GuestList = response.json().await?;

        Ok(list.data)
    }
}
