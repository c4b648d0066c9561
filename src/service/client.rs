use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client() -> Result<Client, ServiceError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_client_sets_the_json_headers() -> Result<(), ServiceError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .create_async()
            .await;

        let client = new_client()?;

        client.post(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the headers are set
        mock.assert_async().await;

        Ok(())
    }
}
