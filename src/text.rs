//! Fitting titles into tile-sized text boxes.

const ELLIPSIS: &str = "...";
const SEPARATORS: [char; 4] = [' ', '-', ':', '_'];

// longest prefix of `chars` (optionally followed by `suffix`) that fits in `max_w`
fn fitting_prefix<F>(chars: &[char], suffix: &str, max_w: u32, width_of: &F) -> usize
where
    F: Fn(&str) -> u32,
{
    let mut lo = 0usize;
    let mut hi = chars.len();
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        let cand: String = chars.iter().take(mid).collect::<String>() + suffix;
        if width_of(&cand) <= max_w {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

fn truncate_line<F>(line: &str, max_w: u32, width_of: &F) -> String
where
    F: Fn(&str) -> u32,
{
    if width_of(line) <= max_w {
        return line.to_string();
    }
    let chars: Vec<char> = line.chars().collect();
    let kept = fitting_prefix(&chars, ELLIPSIS, max_w, width_of);
    if kept == 0 {
        ELLIPSIS.to_string()
    } else {
        chars.iter().take(kept).collect::<String>() + ELLIPSIS
    }
}

/// Split `name` into at most two lines no wider than `max_w`.
///
/// The first line breaks at the last separator that fits; whatever does not
/// fit on the second line is cut with an ellipsis.
pub fn wrap_title<F>(name: &str, max_w: u32, width_of: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    if width_of(name) <= max_w {
        return vec![name.to_string()];
    }

    let chars: Vec<char> = name.chars().collect();
    let lo = fitting_prefix(&chars, "", max_w, &width_of);
    let mut first: String = chars.iter().take(lo).collect();
    let mut remaining: String = chars.iter().skip(lo).collect();

    if let Some(pos) = first.rfind(|c: char| SEPARATORS.contains(&c)) {
        let head = &first[..pos];
        if !head.is_empty() {
            let sep_len = first[pos..].chars().next().map_or(1, char::len_utf8);
            remaining = first[pos + sep_len..].to_string() + &remaining;
            first = head.to_string();
        }
    }

    let second = truncate_line(&remaining, max_w, &width_of);
    vec![first, second]
}

#[cfg(test)]
mod tests {
    use super::wrap_title;

    fn mono(s: &str) -> u32 {
        s.chars().count() as u32 * 10
    }

    #[test]
    fn short_titles_stay_on_one_line() {
        assert_eq!(wrap_title("Doom", 100, mono), vec!["Doom"]);
    }

    #[test]
    fn breaks_at_last_separator() {
        let lines = wrap_title("Metal Gear Solid", 110, mono);
        assert_eq!(lines, vec!["Metal Gear", "Solid"]);
    }

    #[test]
    fn second_line_gets_an_ellipsis() {
        let lines = wrap_title("The Legend of Zelda: Ocarina of Time", 120, mono);
        assert_eq!(lines[0], "The Legend");
        assert_eq!(lines[1], "of Zelda:...");
        assert!(lines.iter().all(|l| mono(l) <= 120));
    }

    #[test]
    fn no_separator_splits_mid_word() {
        assert_eq!(wrap_title("Hollowknight", 60, mono), vec!["Hollow", "knight"]);
        assert_eq!(wrap_title("Hollowknightish", 60, mono), vec!["Hollow", "kni..."]);
    }
}
