/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// Peek the head of the .tokens stream, returning the
/// Token, or its Kind
///
/// Modifiers
///     ~  .tokens := return .kind
///
/// Variants
///     /1 .tokens
macro_rules! peek {
    ($tokens:expr) => {
        $tokens.peek()
    };
    (~ $tokens:expr) => {
        $tokens.peek().map(|token| token.kind)
    };
}

/// Pop the head of the .tokens stream, returning the
/// Token. Typically used in combination with peek!
///
/// Variants
///     /1 .tokens
macro_rules! pop {
    ($tokens:expr) => {
        $tokens.pop()
    };
}

/// ```text
/// Manipulate the given state .machine (or .parser),
/// pushing / popping states in the stack and modifying the
/// current top state
///
/// Variants
///     /1 .machine, $op .state
///     /2 .parser, $op .state *[, $op .state ]
///
///     $op :=
///         | -> (change top state)
///         | >> (change top state, add old top to stack)
///         | << (pop state from stack to top)
/// ```
macro_rules! state {
    (~$parser:expr, $( $op:tt $state:expr ),+) => {
        $( state!($parser.state, $op $state); )+
    };

    ($machine:expr, -> $state:expr) => {
        *$machine.top_mut() = $state
    };
    ($machine:expr, >> $state:expr) => {
        $machine.push_top($state)
    };
    ($machine:expr, << $_:expr) => {
        $machine.pop()
    };
}

/// Return a syntax error of $kind, positioned at .token
///
/// Variants
///     /1 $kind => .token
macro_rules! fail {
    ($kind:ident => $token:expr) => {
        return Err($crate::event::parser::syntax(
            $crate::event::error::ParseError::$kind,
            &$token,
        ))
    };
}
