//! External collaborators: the phase and attachment REST APIs.
//!
//! The traits are the seams the GUI depends on; [`PortalClient`] is the
//! reqwest-backed implementation talking to the portal service.

use std::future::Future;

use anyhow::Context;
use reqwest::StatusCode;

use super::model::{Attachment, AttachmentUpdate, Feed, NewAttachment, Phase, ProductTemplate};
use super::notifications::Notification;
use super::stage_form::PhaseUpdate;
use super::timeline::Timeline;

pub trait PhaseApi {
    /// Applies a partial update to one phase. `phase_index` is the position
    /// of the phase in the project's list, carried along so callers can
    /// reconcile collection state after the request.
    fn update_phase(
        &self,
        project_id: i64,
        phase_id: i64,
        delta: &PhaseUpdate,
        phase_index: usize,
    ) -> impl Future<Output = anyhow::Result<()>>;
}

pub trait AttachmentApi {
    fn add_product_attachment(
        &self,
        project_id: i64,
        phase_id: i64,
        product_id: i64,
        attachment: &NewAttachment,
    ) -> impl Future<Output = anyhow::Result<Attachment>>;

    fn update_product_attachment(
        &self,
        project_id: i64,
        phase_id: i64,
        product_id: i64,
        attachment_id: i64,
        update: &AttachmentUpdate,
    ) -> impl Future<Output = anyhow::Result<Attachment>>;

    fn remove_product_attachment(
        &self,
        project_id: i64,
        phase_id: i64,
        product_id: i64,
        attachment_id: i64,
    ) -> impl Future<Output = anyhow::Result<()>>;
}

/// HTTP client for the portal REST API.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: reqwest::Client,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn phase_url(&self, project_id: i64, phase_id: i64) -> String {
        format!("{}/projects/{project_id}/phases/{phase_id}", self.base_url)
    }

    fn attachments_url(&self, project_id: i64, phase_id: i64, product_id: i64) -> String {
        format!(
            "{}/products/{product_id}/attachments",
            self.phase_url(project_id, phase_id)
        )
    }

    pub async fn get_phases(&self, project_id: i64) -> anyhow::Result<Vec<Phase>> {
        let url = format!("{}/projects/{project_id}/phases", self.base_url);
        let phases = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("malformed phase list")?;
        Ok(phases)
    }

    pub async fn get_product_templates(&self) -> anyhow::Result<Vec<ProductTemplate>> {
        let url = format!("{}/product-templates", self.base_url);
        let templates = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("malformed product template list")?;
        Ok(templates)
    }

    pub async fn get_phase_feed(&self, project_id: i64, phase_id: i64) -> anyhow::Result<Feed> {
        let url = format!("{}/feed", self.phase_url(project_id, phase_id));
        let feed = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("malformed feed")?;
        Ok(feed)
    }

    /// The timeline is optional per phase; a 404 is a normal answer.
    pub async fn get_timeline(
        &self,
        project_id: i64,
        phase_id: i64,
    ) -> anyhow::Result<Option<Timeline>> {
        let url = format!("{}/timeline", self.phase_url(project_id, phase_id));
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let timeline = response
            .error_for_status()?
            .json()
            .await
            .context("malformed timeline")?;
        Ok(Some(timeline))
    }

    pub async fn get_notifications(&self, project_id: i64) -> anyhow::Result<Vec<Notification>> {
        let url = format!("{}/notifications?projectId={project_id}", self.base_url);
        let notifications = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("malformed notification list")?;
        Ok(notifications)
    }
}

impl PhaseApi for PortalClient {
    async fn update_phase(
        &self,
        project_id: i64,
        phase_id: i64,
        delta: &PhaseUpdate,
        phase_index: usize,
    ) -> anyhow::Result<()> {
        tracing::debug!(project_id, phase_id, phase_index, "updating phase");
        self.http
            .patch(self.phase_url(project_id, phase_id))
            .json(delta)
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("phase {phase_id} update rejected"))?;
        Ok(())
    }
}

impl AttachmentApi for PortalClient {
    async fn add_product_attachment(
        &self,
        project_id: i64,
        phase_id: i64,
        product_id: i64,
        attachment: &NewAttachment,
    ) -> anyhow::Result<Attachment> {
        let created = self
            .http
            .post(self.attachments_url(project_id, phase_id, product_id))
            .json(attachment)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("malformed attachment")?;
        Ok(created)
    }

    async fn update_product_attachment(
        &self,
        project_id: i64,
        phase_id: i64,
        product_id: i64,
        attachment_id: i64,
        update: &AttachmentUpdate,
    ) -> anyhow::Result<Attachment> {
        let url = format!(
            "{}/{attachment_id}",
            self.attachments_url(project_id, phase_id, product_id)
        );
        let updated = self
            .http
            .patch(&url)
            .json(update)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("malformed attachment")?;
        Ok(updated)
    }

    async fn remove_product_attachment(
        &self,
        project_id: i64,
        phase_id: i64,
        product_id: i64,
        attachment_id: i64,
    ) -> anyhow::Result<()> {
        let url = format!(
            "{}/{attachment_id}",
            self.attachments_url(project_id, phase_id, product_id)
        );
        self.http
            .delete(&url)
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("attachment {attachment_id} removal rejected"))?;
        Ok(())
    }
}
