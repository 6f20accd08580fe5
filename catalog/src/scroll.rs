/// Turns "last visible row" observations into load-more signals.
///
/// Hosts call [`EdgeTrigger::observe`] every time the list is laid out. It
/// fires only when the last visible index *changes* to a value at or past the
/// end of the loaded list, so a list sitting at its end doesn't emit a
/// `load_more` per frame.
#[derive(Debug, Default)]
pub struct EdgeTrigger {
    last_seen: Option<Option<usize>>,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, last_visible: Option<usize>, len: usize) -> bool {
        if self.last_seen == Some(last_visible) {
            return false;
        }
        self.last_seen = Some(last_visible);
        match last_visible {
            Some(index) => index + 1 >= len,
            None => false,
        }
    }
}
