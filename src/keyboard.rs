use std::fmt::Display;

use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::{ControlState, PlaybackAction, Radio, SceneEvent};

struct KeyAction {
    code: KeyCode,
    description: String,
    event: SceneEvent,
    radio: Radio,
    is_active_in: Box<dyn Fn(&ControlState) -> bool>,
}

impl KeyAction {
    fn execute(&self) {
        self.event.clone().send(&self.radio);
    }
}

impl Display for KeyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

pub struct Keyboard {
    radio: Radio,
    actions: Vec<KeyAction>,
}

impl Keyboard {
    pub fn new(radio: Radio) -> Self {
        Self {
            radio,
            actions: Default::default(),
        }
    }

    pub fn with_actions(mut self) -> Self {
        self.add_action(
            KeyCode::Space,
            "Space to pause",
            SceneEvent::Playback(PlaybackAction::TogglePause),
            Box::new(|state| matches!(state, ControlState::Animating)),
        );
        self.add_action(
            KeyCode::Space,
            "Space to resume",
            SceneEvent::Playback(PlaybackAction::TogglePause),
            Box::new(|state| matches!(state, ControlState::Paused)),
        );
        self.add_action(
            KeyCode::ArrowUp,
            "Up for faster",
            SceneEvent::Playback(PlaybackAction::SpeedUp),
            Box::new(|state| matches!(state, ControlState::Animating)),
        );
        self.add_action(
            KeyCode::ArrowDown,
            "Down for slower",
            SceneEvent::Playback(PlaybackAction::SlowDown),
            Box::new(|state| matches!(state, ControlState::Animating)),
        );
        self.add_action(
            KeyCode::KeyR,
            "R to restart the cycle",
            SceneEvent::Playback(PlaybackAction::Restart),
            Box::new(|_| true),
        );
        self.add_action(
            KeyCode::Escape,
            "Esc to quit",
            SceneEvent::Exit,
            Box::new(|_| true),
        );
        self
    }

    pub fn handle_key_event(&self, key_event: KeyEvent, control_state: &ControlState) {
        if !key_event.state.is_pressed() {
            return;
        }
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return;
        };
        for action in &self.actions {
            if action.code == code && (action.is_active_in)(control_state) {
                action.execute();
            }
        }
    }

    pub fn legend(&self, control_state: &ControlState) -> String {
        self.actions
            .iter()
            .filter(|action| (action.is_active_in)(control_state))
            .map(|action| action.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn add_action(
        &mut self,
        code: KeyCode,
        description: &str,
        event: SceneEvent,
        is_active_in: Box<dyn Fn(&ControlState) -> bool>,
    ) {
        self.actions.push(KeyAction {
            code,
            description: description.to_string(),
            event,
            radio: self.radio.clone(),
            is_active_in,
        });
    }
}
