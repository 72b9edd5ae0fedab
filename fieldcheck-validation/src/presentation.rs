// Error tip rendering boundary

use crate::TipSink;
use std::collections::HashMap;
use tracing::debug;

/// Normalize a container id to `#id` form.
pub fn fix_id(id: &str) -> String {
    if id.contains('#') {
        id.to_string()
    } else {
        format!("#{}", id)
    }
}

/// State of one tip container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipContainer {
    pub visible: bool,
    /// Own text, used when there is no nested holder
    pub text: String,
    /// Nested text holder, preferred when present
    pub holder: Option<String>,
}

impl TipContainer {
    /// Container with a nested text holder
    pub fn with_holder() -> Self {
        Self {
            holder: Some(String::new()),
            ..Self::default()
        }
    }

    /// Text currently displayed
    pub fn displayed(&self) -> &str {
        self.holder.as_deref().unwrap_or(&self.text)
    }

    fn set_text(&mut self, message: &str) {
        match &mut self.holder {
            Some(holder) => *holder = message.to_string(),
            None => self.text = message.to_string(),
        }
    }
}

/// In-memory [`TipSink`] that records what a UI would render.
#[derive(Debug, Clone, Default)]
pub struct MemoryTips {
    containers: HashMap<String, TipContainer>,
    alerts: Vec<String>,
    scroll_requests: usize,
    missed: Vec<String>,
}

impl MemoryTips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a container; `id` is normalized with [`fix_id`]
    pub fn add_container(&mut self, id: &str, container: TipContainer) {
        self.containers.insert(fix_id(id), container);
    }

    pub fn with_container(mut self, id: &str, container: TipContainer) -> Self {
        self.add_container(id, container);
        self
    }

    pub fn container(&self, id: &str) -> Option<&TipContainer> {
        self.containers.get(&fix_id(id))
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Targets that were shown to but never declared
    pub fn missed_targets(&self) -> &[String] {
        &self.missed
    }
}

impl TipSink for MemoryTips {
    fn show(&mut self, target: &str, message: &str, scroll: bool) {
        let id = fix_id(target);
        let Some(container) = self.containers.get_mut(&id) else {
            debug!(target_id = %id, "No such tip container");
            self.missed.push(id);
            return;
        };
        debug!(target_id = %id, message = %message, scroll, "Showing tip");
        container.visible = true;
        container.set_text(message);
        if scroll {
            self.scroll_requests += 1;
        }
    }

    fn hide(&mut self, target: &str) {
        let id = fix_id(target);
        debug!(target_id = %id, "Hiding tip");
        if let Some(container) = self.containers.get_mut(&id) {
            container.visible = false;
            container.set_text("");
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn has_target(&self, target: &str) -> bool {
        self.containers.contains_key(&fix_id(target))
    }
}
