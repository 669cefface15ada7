use crate::{error, Payload, FRAME_LEN, HEAD1, HEAD2, TAIL1, TAIL2};

/// Frame a payload for transmission.
pub fn encode(payload: Payload) -> [u8; FRAME_LEN] {
    let [p0, p1, p2, p3] = payload.0;

    [HEAD1, HEAD2, p0, p1, p2, p3, TAIL1, TAIL2]
}

/// Frame a payload into a destination medium via an iterator.
///
/// Bytes already written are left in place if `dst` runs out early.
pub fn encode_into<'a>(
    payload: Payload,
    dst: impl IntoIterator<Item = &'a mut u8>,
) -> Result<(), error::EndOfInput> {
    let mut dst = dst.into_iter();

    for byte in encode(payload) {
        *dst.next().ok_or(error::EndOfInput)? = byte;
    }

    Ok(())
}

/// Validate a whole frame and extract its payload.
pub fn decode(frame: &[u8; FRAME_LEN]) -> Result<Payload, error::Malformed> {
    let [h1, h2, p0, p1, p2, p3, t1, t2] = *frame;

    if h1 != HEAD1 || h2 != HEAD2 {
        Err(error::Malformed::Header)?;
    }

    for (expected, found) in [(TAIL1, t1), (TAIL2, t2)] {
        if expected != found {
            Err(error::TrailerMismatch { expected, found })?;
        }
    }

    Ok(Payload([p0, p1, p2, p3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let frame = encode(Payload([0xde, 0xad, 0xbe, 0xef]));

        assert_eq!([0xaa, 0xaf, 0xde, 0xad, 0xbe, 0xef, 0xfa, 0xff], frame);
    }

    #[test]
    fn float() {
        let frame = encode(Payload::from(1.2f32));

        assert_eq!([0xaa, 0xaf, 0x9a, 0x99, 0x99, 0x3f, 0xfa, 0xff], frame);
    }

    mod into {
        use super::*;

        #[test]
        fn exact() {
            let mut buf = [0u8; FRAME_LEN];

            encode_into(Payload([1, 2, 3, 4]), buf.iter_mut()).unwrap();

            assert_eq!(encode(Payload([1, 2, 3, 4])), buf);
        }

        #[test]
        fn short() {
            let mut buf = [0u8; FRAME_LEN - 1];

            assert_eq!(
                Err(error::EndOfInput),
                encode_into(Payload([1, 2, 3, 4]), buf.iter_mut())
            );
        }

        #[test]
        fn offset() {
            let mut buf = [0u8; 12];

            encode_into(Payload([1, 2, 3, 4]), buf.iter_mut().skip(2)).unwrap();

            assert_eq!([0, 0, 0xaa, 0xaf, 1, 2, 3, 4, 0xfa, 0xff, 0, 0], buf);
        }
    }

    mod decoding {
        use super::*;

        #[test]
        fn valid() {
            let payload = Payload([HEAD1, TAIL2, HEAD1, TAIL1]);

            assert_eq!(Ok(payload), decode(&encode(payload)));
        }

        #[test]
        fn bad_header() {
            let mut frame = encode(Payload::ZERO);
            frame[1] = 0x00;

            assert_eq!(Err(error::Malformed::Header), decode(&frame));

            let mut frame = encode(Payload::ZERO);
            frame[0] = 0x00;

            assert_eq!(Err(error::Malformed::Header), decode(&frame));
        }

        #[test]
        fn bad_trailer() {
            let mut frame = encode(Payload::ZERO);
            frame[7] = 0x00;

            assert_eq!(
                Err(error::Malformed::Trailer(error::TrailerMismatch {
                    expected: TAIL2,
                    found: 0x00
                })),
                decode(&frame)
            );
        }
    }
}
