//! The streaming translator interface.
//!
//! A [`Translator`] converts a byte stream from one character set to
//! another, one chunk at a time. The implementations live in the
//! per-charset crates; this module defines the contract they share.

use crate::error::CharsetError;

/// A stateful, chunk-at-a-time charset conversion.
///
/// Translators are fed arbitrary slices of the input stream and may carry
/// partial state between calls, such as the first byte of a double-byte
/// pair whose second byte has not arrived yet. The output of each call
/// borrows the translator's internal scratch buffer and is only valid
/// until the next call.
///
/// # Usage
///
/// ```ignore
/// let mut translator = registry.translator("big5")?;
/// let (consumed, utf8) = translator.translate(chunk, false)?;
/// ```
pub trait Translator: std::fmt::Debug {
    /// Translate one chunk of the input stream.
    ///
    /// `data` is the next piece of the stream; `eof` marks it as the last
    /// one, letting the implementation flush or discard partial state.
    /// Returns the number of input bytes consumed and the output produced
    /// by this call alone.
    ///
    /// # Errors
    ///
    /// Only for failures unrelated to the input bytes, such as a charset
    /// whose mapping data cannot be provided. Malformed input is handled
    /// by each implementation's replacement policy, not reported as an
    /// error.
    fn translate(&mut self, data: &[u8], eof: bool) -> Result<(usize, &[u8]), CharsetError>;
}

/// Run `translator` over all of `data` and collect the output.
///
/// The buffer is fed as a single final chunk; any remainder a partial
/// consumer leaves behind is fed again until the translator stops making
/// progress.
///
/// # Errors
///
/// Propagates the first error returned by [`Translator::translate`].
pub fn translate_all(
    translator: &mut dyn Translator,
    data: &[u8],
) -> Result<Vec<u8>, CharsetError> {
    let mut out = Vec::new();
    let mut rest = data;
    loop {
        let (consumed, produced) = translator.translate(rest, true)?;
        out.extend_from_slice(produced);
        // A translator that consumes nothing has no way to finish.
        if consumed == 0 || consumed >= rest.len() {
            break;
        }
        rest = &rest[consumed..];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Upcases ASCII, exercising the plain one-call path.
    #[derive(Debug)]
    struct Upcase {
        scratch: Vec<u8>,
    }

    impl Translator for Upcase {
        fn translate(&mut self, data: &[u8], _eof: bool) -> Result<(usize, &[u8]), CharsetError> {
            self.scratch.clear();
            self.scratch.extend(data.iter().map(u8::to_ascii_uppercase));
            Ok((data.len(), &self.scratch))
        }
    }

    /// Consumes at most one byte per call, exercising the re-feed loop.
    #[derive(Debug)]
    struct OneByte {
        scratch: Vec<u8>,
    }

    impl Translator for OneByte {
        fn translate(&mut self, data: &[u8], _eof: bool) -> Result<(usize, &[u8]), CharsetError> {
            self.scratch.clear();
            match data.first() {
                Some(&byte) => {
                    self.scratch.push(byte);
                    Ok((1, &self.scratch))
                }
                None => Ok((0, &self.scratch)),
            }
        }
    }

    #[test]
    fn translate_all_collects_the_output() {
        let mut upcase = Upcase { scratch: Vec::new() };
        assert_eq!(translate_all(&mut upcase, b"hello").unwrap(), b"HELLO");
    }

    #[test]
    fn translate_all_refeeds_partial_consumers() {
        let mut one = OneByte { scratch: Vec::new() };
        assert_eq!(translate_all(&mut one, b"abc").unwrap(), b"abc");
    }

    #[test]
    fn translate_all_accepts_empty_input() {
        let mut upcase = Upcase { scratch: Vec::new() };
        assert_eq!(translate_all(&mut upcase, b"").unwrap(), b"");
    }

    #[test]
    fn translators_work_as_trait_objects() {
        let mut translator: Box<dyn Translator> = Box::new(Upcase { scratch: Vec::new() });
        let (consumed, out) = translator.translate(b"ok", true).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(out, b"OK");
    }
}
