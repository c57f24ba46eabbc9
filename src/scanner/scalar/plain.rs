/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{
    scanner::{input::Input, is_blank, is_break, is_value},
    token::{Kind, Token},
};

/// Scans a plain scalar from the head of .input, returning
/// a Token spanning it.
///
/// A plain scalar ends at whitespace, a line break, the
/// end of input, or a value indicator (': '). The caller
/// must ensure the head of .input is none of these, so
/// that the scalar holds at least one character.
pub(in crate::scanner) fn scan_plain_scalar(input: &mut Input) -> Token
{
    let start = input.mark();

    while let Some(c) = input.la(1)
    {
        if is_blank(c) || is_break(c) || is_value(c, input.la(2))
        {
            break;
        }

        input.forward(1);
    }

    let stop = input.index().saturating_sub(1).max(start.at);

    Token::new(Kind::PlainScalar, start.at, stop, start.line, start.column)
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    fn scan(data: &str) -> (String, usize)
    {
        let mut input = Input::new(data);
        let token = scan_plain_scalar(&mut input);

        (token.text(data).to_string(), input.index())
    }

    #[test]
    fn stops_at_space()
    {
        assert_eq!(scan("hello world"), ("hello".to_string(), 5));
    }

    #[test]
    fn stops_at_value_indicator()
    {
        assert_eq!(scan("key: value"), ("key".to_string(), 3));
        assert_eq!(scan("key:\nvalue"), ("key".to_string(), 3));
        assert_eq!(scan("key:"), ("key".to_string(), 3));
    }

    #[test]
    fn colon_without_space_is_content()
    {
        assert_eq!(scan("http://example.com x"), ("http://example.com".to_string(), 18));
    }

    #[test]
    fn multibyte_span()
    {
        assert_eq!(scan("grüße\n"), ("grüße".to_string(), 7));
    }
}
