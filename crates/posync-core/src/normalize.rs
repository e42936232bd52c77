//! Canonical PO text for the `polib` parser.
//!
//! `polib` needs a header entry that carries every standard metadata key and
//! assumes each line is well formed. Gettext itself treats the header and
//! most keys as optional. [`normalize`] validates the raw text, rewrites
//! every entry into one canonical layout and completes or injects the
//! header, so anything it accepts parses without surprises.

/// Header keys the parser requires, with the value used when one is absent.
const REQUIRED_HEADER_KEYS: [(&str, &str); 9] = [
    ("Project-Id-Version", ""),
    ("POT-Creation-Date", ""),
    ("PO-Revision-Date", ""),
    ("Language-Team", ""),
    ("MIME-Version", "1.0"),
    ("Content-Type", "text/plain; charset=UTF-8"),
    ("Content-Transfer-Encoding", "8bit"),
    ("Language", ""),
    ("Plural-Forms", "nplurals=1; plural=0;"),
];

/// Keywords with a single-line prefix the parser understands.
const KEYWORDS: [&str; 14] = [
    "msgctxt",
    "msgid",
    "msgid_plural",
    "msgstr",
    "msgstr[0]",
    "msgstr[1]",
    "msgstr[2]",
    "msgstr[3]",
    "msgstr[4]",
    "msgstr[5]",
    "msgstr[6]",
    "msgstr[7]",
    "msgstr[8]",
    "msgstr[9]",
];

/// One keyword and its string parts, still escaped.
struct Field {
    keyword: String,
    parts: Vec<String>,
}

impl Field {
    fn is_msgstr(&self) -> bool {
        self.keyword.starts_with("msgstr")
    }

    fn joined(&self) -> String {
        self.parts.concat()
    }
}

#[derive(Default)]
struct Entry {
    line: usize,
    comments: Vec<String>,
    fields: Vec<Field>,
}

impl Entry {
    fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.fields.is_empty()
    }

    fn field(&self, keyword: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.keyword == keyword)
    }

    fn is_header(&self) -> bool {
        self.field("msgctxt").is_none()
            && self.field("msgid").is_some_and(|f| f.joined().is_empty())
            && self.field("msgstr").is_some()
    }

    fn has_msgstr(&self) -> bool {
        self.fields.iter().any(Field::is_msgstr)
    }
}

/// Validate PO text and rewrite it into the canonical layout.
///
/// Returns a message naming the offending line when the text is not valid
/// PO content.
pub(crate) fn normalize(text: &str) -> Result<String, String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut entries = merge_comment_blocks(split_entries(text)?);

    for entry in &entries {
        if entry.field("msgid").is_none() {
            return Err(format!("line {}: entry has no msgid", entry.line));
        }
    }

    match entries.first_mut() {
        Some(first) if first.is_header() => complete_header(first),
        _ => entries.insert(0, synthesized_header()),
    }

    Ok(render(&entries))
}

fn split_entries(text: &str) -> Result<Vec<Entry>, String> {
    let mut entries = Vec::new();
    let mut current = Entry::default();

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            if !current.is_empty() {
                entries.push(std::mem::take(&mut current));
            }
            continue;
        }

        if current.is_empty() {
            current.line = number;
        }

        if line.starts_with('#') {
            if current.has_msgstr() {
                entries.push(std::mem::take(&mut current));
                current.line = number;
            }
            current.comments.push(line.to_string());
            continue;
        }

        if line.starts_with('"') {
            let part = unquote(line).ok_or_else(|| format!("line {number}: unterminated string"))?;
            match current.fields.last_mut() {
                Some(field) => field.parts.push(part),
                None => return Err(format!("line {number}: string outside of a keyword")),
            }
            continue;
        }

        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("line {number}: expected a keyword and a string"))?;
        if !KEYWORDS.contains(&keyword) {
            return Err(format!("line {number}: unknown keyword {keyword:?}"));
        }
        let part =
            unquote(rest.trim_start()).ok_or_else(|| format!("line {number}: unterminated string"))?;

        let starts_entry = keyword == "msgctxt" || keyword == "msgid";
        if starts_entry && current.has_msgstr() {
            entries.push(std::mem::take(&mut current));
            current.line = number;
        }
        if current.field(keyword).is_some() {
            return Err(format!("line {number}: duplicate {keyword}"));
        }
        current.fields.push(Field {
            keyword: keyword.to_string(),
            parts: vec![part],
        });
    }

    if !current.is_empty() {
        entries.push(current);
    }
    Ok(entries)
}

/// Attach comment-only blocks to the entry that follows them.
fn merge_comment_blocks(entries: Vec<Entry>) -> Vec<Entry> {
    let mut merged: Vec<Entry> = Vec::with_capacity(entries.len());
    let mut pending: Vec<String> = Vec::new();

    for mut entry in entries {
        if entry.fields.is_empty() {
            pending.append(&mut entry.comments);
            continue;
        }
        if !pending.is_empty() {
            pending.append(&mut entry.comments);
            entry.comments = std::mem::take(&mut pending);
        }
        merged.push(entry);
    }
    merged
}

/// Strip the surrounding quotes of a string token. The closing quote must
/// not be escaped.
fn unquote(token: &str) -> Option<String> {
    let inner = token.strip_prefix('"')?.strip_suffix('"')?;
    let trailing_backslashes = inner.chars().rev().take_while(|&c| c == '\\').count();
    (trailing_backslashes % 2 == 0).then(|| inner.to_string())
}

fn complete_header(header: &mut Entry) {
    let Some(msgstr) = header.fields.iter_mut().find(|f| f.keyword == "msgstr") else {
        return;
    };

    let joined = msgstr.joined();
    let present: Vec<&str> = joined
        .split("\\n")
        .filter_map(|line| line.split_once(':').map(|(key, _)| key))
        .collect();

    let missing: Vec<String> = REQUIRED_HEADER_KEYS
        .iter()
        .filter(|(key, _)| !present.contains(key))
        .map(|(key, value)| format!("{key}: {value}\\n"))
        .collect();
    if missing.is_empty() {
        return;
    }
    if !joined.is_empty() && !joined.ends_with("\\n") {
        msgstr.parts.push("\\n".to_string());
    }
    msgstr.parts.extend(missing);
}

fn synthesized_header() -> Entry {
    let mut parts = vec![String::new()];
    parts.extend(
        REQUIRED_HEADER_KEYS
            .iter()
            .map(|(key, value)| format!("{key}: {value}\\n")),
    );
    Entry {
        line: 0,
        comments: Vec::new(),
        fields: vec![
            Field {
                keyword: "msgid".to_string(),
                parts: vec![String::new()],
            },
            Field {
                keyword: "msgstr".to_string(),
                parts,
            },
        ],
    }
}

fn render(entries: &[Entry]) -> String {
    let mut out = String::new();
    for entry in entries {
        for comment in &entry.comments {
            out.push_str(comment);
            out.push('\n');
        }
        for field in &entry.fields {
            let mut parts = field.parts.iter();
            let first = parts.next().map(String::as_str).unwrap_or_default();
            out.push_str(&format!("{} \"{first}\"\n", field.keyword));
            for part in parts {
                out.push_str(&format!("\"{part}\"\n"));
            }
        }
        out.push('\n');
    }
    out
}
