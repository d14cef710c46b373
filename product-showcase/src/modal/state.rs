use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

/// Open or close the detail modal.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum ModalCommand {
    Show(String),
    Hide,
}

/// Visibility and contents of the detail modal.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
    displayed_name: Option<String>,
}

impl ModalState {
    /// Show the modal for `name`. Blank names are ignored.
    pub fn show(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.visible = true;
        self.displayed_name = Some(name.to_string());
        true
    }

    /// Hide the modal. Returns whether it was visible.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn displayed_name(&self) -> Option<&str> {
        self.displayed_name.as_deref()
    }

    pub fn heading(&self) -> &str {
        self.displayed_name().unwrap_or_default()
    }

    pub fn body(&self) -> String {
        self.displayed_name()
            .map(|name| format!("Masterpiece of {name}."))
            .unwrap_or_default()
    }

    /// Full modal text: `"<name>: Masterpiece of <name>."`.
    pub fn describe(&self) -> Option<String> {
        self.displayed_name()
            .map(|name| format!("{name}: {}", self.body()))
    }
}

/// Where a click landed relative to the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Content,
    Backdrop,
}

impl ModalClick {
    /// Classify `cursor` against the content panel's rectangle. Both must be
    /// in the same coordinate space.
    pub fn classify(cursor: Vec2, content: Rect) -> Self {
        if content.contains(cursor) {
            Self::Content
        } else {
            Self::Backdrop
        }
    }
}

pub fn apply_modal_commands(
    mut events: EventReader<ModalCommand>,
    mut modal: ResMut<ModalState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        match event {
            ModalCommand::Show(name) => {
                if modal.show(name) {
                    info!("Showing details for {}", name);
                    rpc_interface.send_notification(
                        "model_selected",
                        serde_json::json!({
                            "name": name,
                            "description": modal.describe(),
                        }),
                    );
                }
            }
            ModalCommand::Hide => {
                if modal.hide() {
                    info!("Detail modal closed");
                    rpc_interface.send_notification("modal_closed", serde_json::json!({}));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_populates_template() {
        let mut modal = ModalState::default();
        assert!(modal.show("Pistol"));

        assert!(modal.is_visible());
        assert_eq!(modal.displayed_name(), Some("Pistol"));
        assert_eq!(modal.heading(), "Pistol");
        assert_eq!(modal.body(), "Masterpiece of Pistol.");
        assert_eq!(modal.describe().as_deref(), Some("Pistol: Masterpiece of Pistol."));
    }

    #[test]
    fn hide_reports_whether_modal_was_open() {
        let mut modal = ModalState::default();
        assert!(!modal.hide());

        modal.show("Backpack");
        assert!(modal.hide());
        assert!(!modal.is_visible());
        assert!(!modal.hide());
    }

    #[test]
    fn blank_name_is_a_no_op() {
        let mut modal = ModalState::default();
        assert!(!modal.show("  "));
        assert_eq!(modal, ModalState::default());
        assert_eq!(modal.describe(), None);
    }

    #[test]
    fn clicks_inside_content_do_not_count_as_backdrop() {
        let content = Rect::from_center_size(Vec2::new(400.0, 300.0), Vec2::new(200.0, 100.0));

        assert_eq!(ModalClick::classify(Vec2::new(400.0, 300.0), content), ModalClick::Content);
        assert_eq!(ModalClick::classify(Vec2::new(301.0, 251.0), content), ModalClick::Content);
        assert_eq!(ModalClick::classify(Vec2::new(299.0, 300.0), content), ModalClick::Backdrop);
        assert_eq!(ModalClick::classify(Vec2::new(400.0, 351.0), content), ModalClick::Backdrop);
    }

    #[test]
    fn modal_commands_drive_state() {
        let mut app = App::new();
        app.add_event::<ModalCommand>()
            .init_resource::<ModalState>()
            .init_resource::<WebRpcInterface>()
            .add_systems(Update, apply_modal_commands);

        app.world_mut().send_event(ModalCommand::Show("Pistol".to_string()));
        app.update();
        let modal = app.world().resource::<ModalState>();
        assert!(modal.is_visible());
        assert_eq!(modal.displayed_name(), Some("Pistol"));

        app.world_mut().send_event(ModalCommand::Hide);
        app.update();
        assert!(!app.world().resource::<ModalState>().is_visible());
        assert_eq!(app.world().resource::<WebRpcInterface>().pending_notifications(), 2);
    }
}
