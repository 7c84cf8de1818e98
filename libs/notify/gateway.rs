use reqwest::Client;
use std::time::Duration;
use url::form_urlencoded::byte_serialize;

/// Public CORS relay tried before the direct endpoint; the historical web
/// client could not reach the bot API without it, and going through it first
/// keeps delivery behavior identical across frontends.
pub const CORS_PROXY_URL: &str = "https://corsproxy.io/?";

/// Fire-and-forget Telegram gateway. Delivery is attempted twice (relay, then
/// direct); after that the message is simply lost and only logged.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    bot_token: String,
    chat_id: String,
}

impl Notifier {
    pub fn new(bot_token: &str, chat_id: &str) -> eyre::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| eyre::eyre!("failed to build HTTP client: {e}"))?;
        Ok(Notifier {
            client,
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    fn api_url(&self) -> String {
        format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.bot_token
        )
    }

    fn proxied_url(&self, text: &str) -> String {
        let encoded_api: String = byte_serialize(self.api_url().as_bytes()).collect();
        let encoded_text: String = byte_serialize(text.as_bytes()).collect();
        format!(
            "{CORS_PROXY_URL}{encoded_api}&chat_id={}&text={encoded_text}&parse_mode=HTML",
            self.chat_id
        )
    }

    /// Send one HTML-formatted message. Returns whether any attempt landed.
    pub async fn send(&self, text: &str) -> bool {
        match self.send_via_proxy(text).await {
            Ok(()) => return true,
            Err(err) => {
                tracing::debug!("proxy delivery failed, trying direct: {err}");
            }
        }
        match self.send_direct(text).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("notification dropped after both attempts: {err}");
                false
            }
        }
    }

    async fn send_via_proxy(&self, text: &str) -> eyre::Result<()> {
        let res = self
            .client
            .get(self.proxied_url(text))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(eyre::eyre!("proxy returned {}", res.status()));
        }
        Ok(())
    }

    async fn send_direct(&self, text: &str) -> eyre::Result<()> {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "HTML",
        });
        let res = self.client.post(self.api_url()).json(&body).send().await?;
        if !res.status().is_success() {
            return Err(eyre::eyre!("bot API returned {}", res.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxied_url_encodes_api_url_and_text() -> eyre::Result<()> {
        let notifier = Notifier::new("123:abc", "-100500")?;
        let url = notifier.proxied_url("status: In progress");
        assert!(url.starts_with("https://corsproxy.io/?https%3A%2F%2Fapi.telegram.org"));
        assert!(url.contains("chat_id=-100500"));
        assert!(url.contains("text=status%3A+In+progress"));
        assert!(url.ends_with("&parse_mode=HTML"));
        Ok(())
    }
}
