// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::task;

use crate::error::Result;

#[derive(Debug, Clone)]
pub(crate) struct Request {
    label: String,
}

pub(crate) struct RequestBuilder {
    label: String,
}

impl RequestBuilder {
    pub(crate) fn new() -> Self {
        Self {
            label: "Password".to_owned(),
        }
    }

    pub(crate) fn with_label(mut self, label: &str) -> Self {
        label.clone_into(&mut self.label);
        self
    }

    pub(crate) fn into_request(self) -> Request {
        Request { label: self.label }
    }
}

#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>>;
}

#[async_trait]
impl<T: Prompt + ?Sized> Prompt for Box<T> {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>> {
        (**self).prompt(req).await
    }
}

/// Reads the password from the controlling terminal without echoing it.
pub(crate) struct RpasswordPrompt;

#[async_trait]
impl Prompt for RpasswordPrompt {
    async fn prompt(&self, req: Request) -> Result<Option<SecretString>> {
        let label = format!("{}: ", req.label);
        Ok(Some(
            task::spawn_blocking(move || rpassword::prompt_password(label).map(SecretString::new))
                .await??,
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Answers prompts from a fixed list, then reports no prompt.
    pub(crate) struct Scripted {
        answers: Mutex<Vec<&'static str>>,
        pub(crate) labels: Mutex<Vec<String>>,
    }

    impl Scripted {
        pub(crate) fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().rev().copied().collect()),
                labels: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl Prompt for Scripted {
        async fn prompt(&self, req: Request) -> Result<Option<SecretString>> {
            self.labels.lock().unwrap().push(req.label);
            Ok(self
                .answers
                .lock()
                .unwrap()
                .pop()
                .map(|answer| SecretString::new(answer.to_owned())))
        }
    }

    #[tokio::test]
    async fn scripted_answers_in_order() -> Result<()> {
        use secrecy::ExposeSecret;

        let prompt = Scripted::new(&["first", "second"]);
        let req = RequestBuilder::new().with_label("Confirm").into_request();
        assert_eq!(
            prompt.prompt(req.clone()).await?.map(|s| s.expose_secret().clone()),
            Some("first".to_owned())
        );
        assert_eq!(
            prompt.prompt(req.clone()).await?.map(|s| s.expose_secret().clone()),
            Some("second".to_owned())
        );
        assert!(prompt.prompt(req).await?.is_none());
        assert_eq!(*prompt.labels.lock().unwrap(), ["Confirm", "Confirm", "Confirm"]);
        Ok(())
    }
}
