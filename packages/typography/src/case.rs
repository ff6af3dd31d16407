/// Convert a preset slug or camelCase name into kebab-case.
///
/// Words break at any non-alphanumeric character, at lower-to-upper
/// transitions, between letters and digits, and before the last capital of
/// an acronym followed by a lowercase letter. Apostrophes are dropped.
///
/// ```
/// use blockprint_typography::to_kebab_case;
///
/// assert_eq!(to_kebab_case("h1"), "h-1");
/// assert_eq!(to_kebab_case("fontSize"), "font-size");
/// assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|c| *c != '\'').collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush_word(&mut current, &mut words);
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = prev.is_numeric() != c.is_numeric()
                || (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));

            if boundary {
                flush_word(&mut current, &mut words);
            }
        }

        current.push(c);
    }
    flush_word(&mut current, &mut words);

    words.join("-").to_lowercase()
}

fn flush_word(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
