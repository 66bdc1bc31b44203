/// Browser call the fullscreen button should make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

/// Fullscreen state of the game embed.
///
/// The state only changes through [`Self::sync`], fed from the document's
/// `fullscreenchange` events, so a rejected request leaves it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullscreenToggle {
    active: bool,
}

impl FullscreenToggle {
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Request to issue when the toggle button is pressed.
    #[must_use]
    pub const fn request(self) -> FullscreenRequest {
        if self.active {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        }
    }

    /// Adopt the document's state: active while any element is fullscreen.
    pub const fn sync(&mut self, fullscreen_element_present: bool) {
        self.active = fullscreen_element_present;
    }

    /// Translation key of the toggle button's accessible label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        if self.active {
            "game.exit_fullscreen"
        } else {
            "game.enter_fullscreen"
        }
    }
}
