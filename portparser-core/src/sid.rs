//! Sentence identifier generation

/// Successor of a sentence identifier
///
/// Digits are incremented from the right with carry (`S000009` becomes
/// `S000010`). A non-digit last character is replaced by `1`. When every
/// character is consumed by the carry the result is `overflow` followed by
/// the carried digits.
pub fn next_name(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    let mut carried = 0;

    while let Some(last) = chars.pop() {
        match last {
            '9' => carried += 1,
            '0'..='8' => {
                let next = char::from(last as u8 + 1);
                return finish(chars, next, carried);
            }
            _ => return finish(chars, '1', carried),
        }
    }

    format!("overflow{}", "0".repeat(carried))
}

fn finish(prefix: Vec<char>, digit: char, carried: usize) -> String {
    let mut out: String = prefix.into_iter().collect();
    out.push(digit);
    out.extend(std::iter::repeat('0').take(carried));
    out
}
