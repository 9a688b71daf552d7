/// Length of the abbreviated hash shown in the page footer.
const SHORT_HASH_LEN: usize = 7;

pub fn git_commit_hash() -> &'static str {
    match option_env!("PORTFOLIO_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

pub fn short_commit_hash() -> &'static str {
    shorten(git_commit_hash())
}

fn shorten(hash: &str) -> &str {
    if hash.len() > SHORT_HASH_LEN && hash.is_ascii() {
        &hash[..SHORT_HASH_LEN]
    } else {
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::shorten;

    #[test]
    fn shorten_keeps_seven_characters() {
        assert_eq!(
            shorten("3f2a9c1d0b8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a"),
            "3f2a9c1"
        );
    }

    #[test]
    fn shorten_leaves_placeholders_alone() {
        assert_eq!(shorten("unknown"), "unknown");
        assert_eq!(shorten(""), "");
    }
}
