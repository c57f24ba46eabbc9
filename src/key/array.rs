/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// Prefix of every array element base name
pub const ARRAY_PREFIX: char = '#';

const PAD: char = '_';

/// Produce the base name of the array element at .index.
///
/// The name is a `#`, then one `_` for every digit of
/// .index after the first, then the digits themselves:
///
/// ```text
/// 0    => #0
/// 9    => #9
/// 10   => #_10
/// 100  => #__100
/// ```
///
/// Names with the same number of digits sort lexically in
/// numeric order. This does not hold across digit counts
/// (`#9` sorts after `#_10`), so callers must not rely on
/// lexical order of names with different widths.
pub fn array_base_name(index: u64) -> String
{
    let digits = index.to_string();
    let pad = digits.len() - 1;

    let mut name = String::with_capacity(1 + pad + digits.len());

    name.push(ARRAY_PREFIX);
    name.extend(std::iter::repeat(PAD).take(pad));
    name.push_str(&digits);

    name
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_digit()
    {
        assert_eq!(array_base_name(0), "#0");
        assert_eq!(array_base_name(9), "#9");
    }

    #[test]
    fn padded()
    {
        assert_eq!(array_base_name(10), "#_10");
        assert_eq!(array_base_name(99), "#_99");
        assert_eq!(array_base_name(100), "#__100");
        assert_eq!(array_base_name(1234), "#___1234");
    }

    #[test]
    fn largest_index()
    {
        let name = array_base_name(u64::MAX);

        assert_eq!(name, format!("#{}{}", "_".repeat(19), u64::MAX));
    }

    #[test]
    fn lexical_order_within_width()
    {
        let names: Vec<_> = (10..100).map(array_base_name).collect();
        let mut sorted = names.clone();
        sorted.sort();

        assert_eq!(names, sorted);
    }

    #[test]
    fn lexical_order_across_widths()
    {
        // The band boundary: numerically 9 < 10, lexically the
        // reverse
        assert!(array_base_name(9) > array_base_name(10));
        assert!(array_base_name(99) > array_base_name(100));
    }
}
