/// Suffix-stripping lemmatizer. The rules are deliberately small heuristics
/// applied in a fixed priority order, first match wins. They mis-stem some
/// irregular English words; the guard list below catches the worst cases
/// (plural-looking endings that are part of the base form).
pub fn lemmatize(word: &str) -> String {
    if word.contains(' ') {
        return word.split(' ').map(lemmatize).collect::<Vec<_>>().join(" ");
    }

    // Suffix rules slice by byte offset and only make sense for English.
    if !word.is_ascii() {
        return word.to_string();
    }

    if word.len() > 5 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }

    if word.len() > 4 && word.ends_with("ing") {
        let mut root = word[..word.len() - 3].to_string();
        root = undouble_trailing_consonant(root);
        if root.ends_with('v') {
            root.push('e'); // having -> hav -> have
        }
        return root;
    }

    if word.len() > 3 && word.ends_with("ed") {
        let root = word[..word.len() - 2].to_string();
        return undouble_trailing_consonant(root);
    }

    if word.len() > 3
        && word.ends_with("es")
        && !word.ends_with("ses")
        && !word.ends_with("xes")
    {
        return word[..word.len() - 2].to_string();
    }

    // Lexical endings that look plural but usually are not ("ingenuous",
    // "analysis", "class"). Left untouched.
    if word.len() > 3
        && (word.ends_with("ous") || word.ends_with("us") || word.ends_with("is") || word.ends_with("ss"))
    {
        return word.to_string();
    }

    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

// Reverses consonant doubling from -ing/-ed attachment: runn -> run,
// dropp -> drop.
fn undouble_trailing_consonant(root: String) -> String {
    let bytes = root.as_bytes();
    if bytes.len() > 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        root[..root.len() - 1].to_string()
    } else {
        root
    }
}
