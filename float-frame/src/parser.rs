use crate::{error, Payload, HEAD1, HEAD2, PAYLOAD_LEN, TAIL1, TAIL2};

/// Position of the parser within a frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    #[default]
    WaitHead1,
    WaitHead2,
    ReceiveData,
    WaitTail1,
    WaitTail2,
}

/// Byte-at-a-time frame recognizer.
///
/// Header mismatches are treated as stream noise and silently restart the
/// search. Trailer mismatches are reported, since by then a header and a
/// full payload have already been consumed. Either way the parser is back
/// in [`State::WaitHead1`] with an empty scratch buffer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parser {
    state: State,
    scratch: [u8; PAYLOAD_LEN],
    filled: u8,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub const fn new() -> Self {
        Self {
            state: State::WaitHead1,
            scratch: [0; PAYLOAD_LEN],
            filled: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of payload bytes collected for the frame in flight.
    #[inline]
    pub fn filled(&self) -> usize {
        self.filled as usize
    }

    /// Drop any partial frame and resume the header search.
    #[inline]
    pub fn reset(&mut self) {
        self.state = State::WaitHead1;
        self.filled = 0;
    }

    /// Consume one byte.
    ///
    /// Yields the payload when `byte` completes a frame, `None` while a
    /// frame is being assembled (or searched for).
    pub fn step(&mut self, byte: u8) -> Result<Option<Payload>, error::TrailerMismatch> {
        match self.state {
            State::WaitHead1 => {
                if byte == HEAD1 {
                    self.state = State::WaitHead2;
                }
            }
            State::WaitHead2 => {
                if byte == HEAD2 {
                    self.filled = 0;
                    self.state = State::ReceiveData;
                } else {
                    self.reset();
                }
            }
            State::ReceiveData => {
                // `filled` is always < PAYLOAD_LEN in this state
                self.scratch[self.filled as usize] = byte;
                self.filled += 1;

                if self.filled as usize == PAYLOAD_LEN {
                    self.state = State::WaitTail1;
                }
            }
            State::WaitTail1 => {
                if byte != TAIL1 {
                    self.reset();
                    Err(error::TrailerMismatch {
                        expected: TAIL1,
                        found: byte,
                    })?;
                }

                self.state = State::WaitTail2;
            }
            State::WaitTail2 => {
                let payload = Payload(self.scratch);
                self.reset();

                if byte != TAIL2 {
                    Err(error::TrailerMismatch {
                        expected: TAIL2,
                        found: byte,
                    })?;
                }

                return Ok(Some(payload));
            }
        }

        Ok(None)
    }
}
