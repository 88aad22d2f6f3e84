/// Whether the surface has finished loading its base style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    NotReady,
    Ready,
}

/// One-shot latch for the surface's "base style ready" signal
///
/// The only transition is `NotReady -> Ready`. A fresh gate is needed for
/// each surface instance.
#[derive(Debug, Clone, Default)]
pub struct ReadyGate {
    state: ReadyState,
}

impl ReadyGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate; returns `false` if it was already open
    pub fn open(&mut self) -> bool {
        match self.state {
            ReadyState::NotReady => {
                self.state = ReadyState::Ready;
                true
            }
            ReadyState::Ready => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == ReadyState::Ready
    }

    pub fn state(&self) -> ReadyState {
        self.state
    }
}
