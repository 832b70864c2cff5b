/// A transient page message. Each `show` bumps the serial, and `expire` only
/// clears the message it was handed the serial for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notice {
    serial: u64,
    text: Option<String>,
}

impl Notice {
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.serial += 1;
        self.text = Some(text.into());
        self.serial
    }

    pub fn expire(&mut self, serial: u64) -> bool {
        if serial != self.serial || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
