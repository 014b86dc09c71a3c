use crate::stack::Stack;

/// Reads the same both ways, ignoring whitespace and case.
///
/// The first half goes onto a stack and is popped back while walking the
/// second half, skipping the middle character of odd-length input.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let half = cleaned.len() / 2;
    let mut stack: Stack<char> = cleaned[..half].iter().copied().collect();

    let second_half = if cleaned.len() % 2 == 1 { half + 1 } else { half };

    cleaned[second_half..]
        .iter()
        .all(|c| stack.pop() == Some(*c))
}

#[cfg(test)]
mod tests {
    use super::is_palindrome;
    use rstest::rstest;

    #[rstest]
    #[case("anilina", true)]
    #[case("radar", true)]
    #[case("reconocer", true)]
    #[case("Anita lava la tina", true)]
    #[case("abba", true)]
    #[case("", true)]
    #[case("x", true)]
    #[case("rust", false)]
    #[case("ab", false)]
    fn palindromes(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_palindrome(text), expected);
    }
}
