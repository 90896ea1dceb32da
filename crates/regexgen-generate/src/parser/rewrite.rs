//! Source rewriting ahead of `regex-syntax`.
//!
//! `regex-syntax` rejects backreferences and lookaround, so these are
//! replaced by named groups whose names carry the construct. The lowering
//! pass recognises the names and emits `groupref`, `assert` or
//! `assert_not`. Open-ended `{,n}` counts become `{0,n}`.

const MARKER: &str = "__regexgen_";

/// Construct hidden behind a marker group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
    Ref(u32),
    /// Index into [`Rewritten::named_refs`].
    NamedRef(usize),
    Ahead,
    NotAhead,
    Behind,
    NotBehind,
}

impl Placeholder {
    fn group_name(self, serial: usize) -> String {
        let kind = match self {
            Placeholder::Ref(id) => format!("ref{id}"),
            Placeholder::NamedRef(slot) => format!("nref{slot}"),
            Placeholder::Ahead => "ahead".to_string(),
            Placeholder::NotAhead => "notahead".to_string(),
            Placeholder::Behind => "behind".to_string(),
            Placeholder::NotBehind => "notbehind".to_string(),
        };
        format!("{MARKER}{kind}_{serial}")
    }

    pub(crate) fn from_group_name(name: &str) -> Option<Placeholder> {
        let (kind, _serial) = name.strip_prefix(MARKER)?.rsplit_once('_')?;
        if let Some(slot) = kind.strip_prefix("nref") {
            return slot.parse().ok().map(Placeholder::NamedRef);
        }
        if let Some(id) = kind.strip_prefix("ref") {
            return id.parse().ok().map(Placeholder::Ref);
        }
        match kind {
            "ahead" => Some(Placeholder::Ahead),
            "notahead" => Some(Placeholder::NotAhead),
            "behind" => Some(Placeholder::Behind),
            "notbehind" => Some(Placeholder::NotBehind),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Rewritten {
    /// Input for `regex-syntax`, with marker groups.
    pub text: String,
    /// The pattern as the `regex` crate accepts it; only meaningful when
    /// `uses_markers` is false.
    pub plain: String,
    /// Group names referenced by `(?P=name)`, in source order.
    pub named_refs: Vec<String>,
    pub uses_markers: bool,
    serial: usize,
}

impl Rewritten {
    fn push(&mut self, ch: char) {
        self.text.push(ch);
        self.plain.push(ch);
    }

    fn push_str(&mut self, value: &str) {
        self.text.push_str(value);
        self.plain.push_str(value);
    }

    /// Open a marker group; `closed` markers have an empty body.
    fn marker(&mut self, placeholder: Placeholder, source: &[char], closed: bool) {
        self.text.push_str("(?P<");
        self.text.push_str(&placeholder.group_name(self.serial));
        self.text.push('>');
        if closed {
            self.text.push(')');
        }
        self.plain.extend(source);
        self.serial += 1;
        self.uses_markers = true;
    }
}

pub(crate) fn rewrite(pattern: &str) -> Rewritten {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = Rewritten::default();
    let mut class_depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\\' {
            match chars.get(i + 1).copied() {
                Some(first @ '1'..='9') if class_depth == 0 => {
                    let mut id = first.to_digit(10).unwrap_or_default();
                    let mut end = i + 2;
                    if let Some(second) = chars.get(end).and_then(|c| c.to_digit(10)) {
                        id = id * 10 + second;
                        end += 1;
                    }
                    out.marker(Placeholder::Ref(id), &chars[i..end], true);
                    i = end;
                }
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                    i += 2;
                }
                None => {
                    out.push('\\');
                    i += 1;
                }
            }
            continue;
        }

        if class_depth > 0 {
            match ch {
                '[' => class_depth += 1,
                ']' => class_depth -= 1,
                _ => {}
            }
            out.push(ch);
            i += 1;
            continue;
        }

        let rest = &chars[i..];
        if ch == '[' {
            class_depth = 1;
            out.push('[');
            i += 1;
            if chars.get(i) == Some(&'^') {
                out.push('^');
                i += 1;
            }
            if chars.get(i) == Some(&']') {
                out.push(']');
                i += 1;
            }
        } else if let Some((placeholder, len)) = lookaround_opening(rest) {
            out.marker(placeholder, &rest[..len], false);
            i += len;
        } else if starts_with(rest, "(?P=") {
            match rest.iter().position(|c| *c == ')') {
                Some(close) => {
                    let name: String = rest[4..close].iter().collect();
                    let slot = out.named_refs.len();
                    out.named_refs.push(name);
                    out.marker(Placeholder::NamedRef(slot), &rest[..=close], true);
                    i += close + 1;
                }
                None => {
                    out.push(ch);
                    i += 1;
                }
            }
        } else if starts_with(rest, "{,") && open_ended_count(&rest[2..]) {
            out.push_str("{0,");
            i += 2;
        } else {
            out.push(ch);
            i += 1;
        }
    }

    out
}

fn lookaround_opening(rest: &[char]) -> Option<(Placeholder, usize)> {
    if starts_with(rest, "(?=") {
        Some((Placeholder::Ahead, 3))
    } else if starts_with(rest, "(?!") {
        Some((Placeholder::NotAhead, 3))
    } else if starts_with(rest, "(?<=") {
        Some((Placeholder::Behind, 4))
    } else if starts_with(rest, "(?<!") {
        Some((Placeholder::NotBehind, 4))
    } else {
        None
    }
}

/// True for `5}` in `{,5}`.
fn open_ended_count(rest: &[char]) -> bool {
    let digits = rest.iter().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && rest.get(digits) == Some(&'}')
}

fn starts_with(chars: &[char], prefix: &str) -> bool {
    let mut idx = 0;
    for expected in prefix.chars() {
        if chars.get(idx) != Some(&expected) {
            return false;
        }
        idx += 1;
    }
    true
}
