/// Banners auto-remove after this many milliseconds.
pub const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    pub fn alert_class(self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Danger => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Notice {
            message: message.into(),
            severity: Severity::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub notice: Notice,
}

/// Live banners, newest first.
#[derive(Debug, Default)]
pub struct Notifications {
    next_id: u64,
    banners: Vec<Banner>,
}

impl Notifications {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.banners.insert(0, Banner { id, notice });
        id
    }

    /// Removing a banner twice (timer after a manual close) is a no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.banners.iter().position(|banner| banner.id == id) {
            Some(index) => {
                self.banners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
