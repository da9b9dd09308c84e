//! Grammar for decoded message text.
//!
//! Text is a sequence of character runs and bracketed tokens. A token is either the alias of a
//! registered control code (`[Voice]`) or a pair of hex octets (`[F8 1B]`). The voice code is
//! followed by a raw path which runs up to the literal `[00 00]`, brackets included.

use winnow::combinator::{alt, delimited, repeat, separated_pair, terminated};
use winnow::prelude::*;
use winnow::token::{take_till, take_until, take_while};

use crate::control::{self, VOICE_OPCODE};

/// Marker closing a voice clip path
pub(crate) const VOICE_PATH_END: &str = "[00 00]";

/// A piece of decoded text
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'s> {
    /// Characters outside of brackets
    Text(&'s str),

    /// Contents of a bracketed token, without the brackets
    Token(&'s str),

    /// Voice code token followed by its path, without the closing `[00 00]`
    Voice {
        /// Contents of the voice code token
        name: &'s str,
        /// Raw path text
        path: &'s str,
    },
}

fn bracketed<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited('[', take_till(0.., ']'), ']').parse_next(input)
}

fn token<'s>(input: &mut &'s str) -> PResult<Segment<'s>> {
    bracketed.map(Segment::Token).parse_next(input)
}

fn voice<'s>(input: &mut &'s str) -> PResult<Segment<'s>> {
    let name = bracketed
        .verify(|name: &str| resolve(name) == Some(VOICE_OPCODE.to_be_bytes()))
        .parse_next(input)?;
    let path = terminated(take_until(0.., VOICE_PATH_END), VOICE_PATH_END).parse_next(input)?;

    Ok(Segment::Voice { name, path })
}

fn text<'s>(input: &mut &'s str) -> PResult<Segment<'s>> {
    take_till(1.., '[').map(Segment::Text).parse_next(input)
}

fn segments<'s>(input: &mut &'s str) -> PResult<Vec<Segment<'s>>> {
    repeat(0.., alt((voice, token, text))).parse_next(input)
}

fn hex_byte(input: &mut &str) -> PResult<u8> {
    take_while(2, ('0'..='9', 'A'..='F', 'a'..='f'))
        .try_map(|digits| u8::from_str_radix(digits, 16))
        .parse_next(input)
}

fn byte_pair(input: &mut &str) -> PResult<[u8; 2]> {
    separated_pair(hex_byte, ' ', hex_byte)
        .map(|(high, low)| [high, low])
        .parse_next(input)
}

/// Split `input` into segments.
///
/// On failure the unparsed remainder is returned, which always starts with an unclosed `[`.
pub(crate) fn split(input: &str) -> Result<Vec<Segment<'_>>, &str> {
    segments.parse(input).map_err(|e| &input[e.offset()..])
}

/// Resolve the contents of a token to the two bytes it stands for.
pub(crate) fn resolve(token: &str) -> Option<[u8; 2]> {
    if let Some(code) = control::lookup_alias(token) {
        return Some(code.opcode.to_be_bytes());
    }

    byte_pair.parse(token).ok()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{resolve, split, Segment};

    #[test]
    fn split_plain_text() {
        assert_eq!(split("Hello"), Ok(vec![Segment::Text("Hello")]));
        assert_eq!(split(""), Ok(vec![]));
    }

    #[test]
    fn split_tokens() {
        assert_eq!(
            split("[NpcTelop]Guild Master[00 00]Hi![LineBreak]"),
            Ok(vec![
                Segment::Token("NpcTelop"),
                Segment::Text("Guild Master"),
                Segment::Token("00 00"),
                Segment::Text("Hi!"),
                Segment::Token("LineBreak"),
            ])
        );
    }

    #[test]
    fn split_adjacent_and_empty_tokens() {
        assert_eq!(
            split("[F8 5A][00 03][]"),
            Ok(vec![
                Segment::Token("F8 5A"),
                Segment::Token("00 03"),
                Segment::Token(""),
            ])
        );
    }

    #[test]
    fn split_voice_paths() {
        assert_eq!(
            split("[Voice]vo/[a].bin[00 00]Hi[F8 1B][00 00]"),
            Ok(vec![
                Segment::Voice {
                    name: "Voice",
                    path: "vo/[a].bin"
                },
                Segment::Text("Hi"),
                Segment::Voice {
                    name: "F8 1B",
                    path: ""
                },
            ])
        );
    }

    #[test]
    fn split_voice_without_terminator() {
        assert_eq!(
            split("[Voice]vo/a.bin[LineBreak]"),
            Ok(vec![
                Segment::Token("Voice"),
                Segment::Text("vo/a.bin"),
                Segment::Token("LineBreak"),
            ])
        );
    }

    #[test]
    fn split_unclosed_token() {
        assert_eq!(split("Hello [Voice"), Err("[Voice"));
        assert_eq!(split("["), Err("["));
    }

    #[test]
    fn resolve_aliases() {
        assert_eq!(resolve("Voice"), Some([0xF8, 0x1B]));
        assert_eq!(resolve("LineBreak"), Some([0x80, 0x01]));
    }

    #[test]
    fn resolve_byte_pairs() {
        assert_eq!(resolve("F8 1B"), Some([0xF8, 0x1B]));
        assert_eq!(resolve("00 00"), Some([0x00, 0x00]));
        assert_eq!(resolve("0a bc"), Some([0x0A, 0xBC]));
    }

    #[test]
    fn resolve_unknown() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("voice"), None);
        assert_eq!(resolve("F81B"), None);
        assert_eq!(resolve("F8 1B 00"), None);
        assert_eq!(resolve("F8  1B"), None);
        assert_eq!(resolve("G8 1B"), None);
    }
}
