/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{
    scanner::{
        error::{ScanError, ScanResult as Result},
        input::Input,
    },
    token::{Kind, Token},
};

const DOUBLE: char = '"';
const ESCAPE: char = '\\';

/// Scans a double quoted scalar from the head of .input,
/// returning a Token spanning both quotes.
///
/// No escape sequences are translated, a '\' only prevents
/// the following character from closing the scalar. Line
/// breaks are kept as is. Running out of input before the
/// closing quote is an error, never a truncated scalar.
pub(in crate::scanner) fn scan_double_quoted_scalar(input: &mut Input) -> Result<Token>
{
    let start = input.mark();

    // Eat left quote
    input.forward(1);

    loop
    {
        match input.la(1)
        {
            None => return Err(ScanError::UnterminatedScalar),
            Some(ESCAPE) => input.forward(2),
            Some(DOUBLE) =>
            {
                input.forward(1);
                break;
            },
            Some(_) => input.forward(1),
        }
    }

    let stop = input.index() - 1;

    Ok(Token::new(
        Kind::DoubleQuotedScalar,
        start.at,
        stop,
        start.line,
        start.column,
    ))
}
