//! # Registry Patcher Module
//!
//! Performs the two structural insertions that register a freshly
//! scaffolded module in a NestJS composition root (`app.module.ts`):
//!
//! 1. a new `import { FooModule } from './modules/foo/foo.module';` line at
//!    the end of the module-import block, and
//! 2. a new `FooModule,` entry at the end of the `imports: [...]` array of
//!    the `@Module` decorator.
//!
//! The document is treated as line-oriented text. The patcher never parses
//! TypeScript; it locates two known-shape anchor regions (the import block
//! and the bracketed `imports` array, found with a bracket-depth scan) and
//! reconstructs the document with the minimal insertions applied. All
//! surrounding text is preserved byte-for-byte. LF line endings are a
//! contract precondition of the host file.
//!
//! The operation is idempotent: if the module identifier is already present
//! anywhere in the document, [`patch_registry`] returns
//! [`PatchResult::AlreadyPatched`] without touching the text.
//!
//! ## Known limitation
//!
//! The array anchor is a substring heuristic (a bare `...Module` token or a
//! `register(`/`forRoot(`-style invocation). A comment or string literal
//! inside the array that happens to match can anchor the insertion at the
//! wrong line. The host file is expected to follow the project's
//! composition-root conventions.

use once_cell::sync::Lazy;
use regex::Regex;


/// Import of a module class from the modules subtree, the preferred anchor
/// for the import insertion.
#[allow(clippy::expect_used)]
static MODULE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^import \{ .*Module \} from ['"]\./modules/"#).expect("valid import regex")
});

/// Opening of the `imports:` array in the `@Module` decorator.
#[allow(clippy::expect_used)]
static IMPORTS_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bimports\s*:\s*\[").expect("valid imports regex")
});

/// A line that denotes a module registration: a bare `FooModule` token or a
/// call-style registration such as `JwtModule.register({ ... })`.
#[allow(clippy::expect_used)]
static REGISTRATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_]*Module\b)|\b(register|forRoot|forRootAsync|forFeature)\s*\(")
        .expect("valid registration regex")
});

/// Outcome of a single structural insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The anchor was found and the insertion was applied
    Inserted,
    /// No anchor line matched; the region was left untouched
    NoAnchor,
}

impl InsertOutcome {
    /// Whether the insertion was applied
    pub fn is_inserted(self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// Result of patching a composition-root document
///
/// The two insertions are independent: one may succeed while the other
/// reports [`InsertOutcome::NoAnchor`]. Callers persist the returned text
/// whenever at least one insertion was applied and surface the rest as
/// warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchResult {
    /// The module identifier is already present; nothing was changed
    AlreadyPatched,
    /// The document was reconstructed with zero, one, or two insertions
    Applied {
        /// The full document text after patching
        text: String,
        /// Outcome of the import-block insertion
        import: InsertOutcome,
        /// Outcome of the `imports: [...]` array insertion
        array: InsertOutcome,
    },
}

impl PatchResult {
    /// Whether any insertion changed the document
    pub fn changed(&self) -> bool {
        match self {
            PatchResult::AlreadyPatched => false,
            PatchResult::Applied { import, array, .. } => {
                import.is_inserted() || array.is_inserted()
            }
        }
    }
}

/// Bounds of the `imports: [...]` array within the document lines.
/// Columns are byte offsets of the opening and closing brackets.
#[derive(Debug, Clone, Copy)]
struct ArrayRegion {
    open_line: usize,
    open_col: usize,
    close_line: usize,
    close_col: usize,
}

/// Insert a module registration into a composition-root document
///
/// # Arguments
///
/// * `document` - Full text of the root file (LF line endings)
/// * `module_ident` - Class identifier being registered, e.g. `FooModule`;
///   its presence anywhere in the document makes the call a no-op
/// * `import_line` - Complete import statement to add to the import block
/// * `entry` - Array entry token, without indentation or trailing comma
///   (the patcher supplies both to match the sibling entries)
///
/// Returns the reconstructed document and the per-insertion outcomes; the
/// input is never mutated in place.
pub fn patch_registry(
    document: &str,
    module_ident: &str,
    import_line: &str,
    entry: &str,
) -> PatchResult {
    if document.contains(module_ident) {
        tracing::debug!(module_ident, "identifier already present, skipping patch");
        return PatchResult::AlreadyPatched;
    }

    // split('\n') keeps a trailing empty element for a final newline, so
    // join('\n') reconstructs the original bytes exactly.
    let mut lines: Vec<String> = document.split('\n').map(str::to_string).collect();

    let import = insert_import(&mut lines, import_line);
    let array = insert_array_entry(&mut lines, entry);

    PatchResult::Applied {
        text: lines.join("\n"),
        import,
        array,
    }
}

/// Insert the import line after the last module import, falling back to the
/// last import of any kind.
fn insert_import(lines: &mut Vec<String>, import_line: &str) -> InsertOutcome {
    let anchor = lines
        .iter()
        .rposition(|l| MODULE_IMPORT.is_match(l))
        .or_else(|| lines.iter().rposition(|l| l.starts_with("import ")));
    match anchor {
        Some(i) => {
            tracing::debug!(line = i, "import anchor found");
            lines.insert(i + 1, import_line.to_string());
            InsertOutcome::Inserted
        }
        None => InsertOutcome::NoAnchor,
    }
}

/// Insert the array entry after the last registration line of the
/// `imports: [...]` array.
fn insert_array_entry(lines: &mut Vec<String>, entry: &str) -> InsertOutcome {
    let Some(region) = find_imports_array(lines) else {
        return InsertOutcome::NoAnchor;
    };
    tracing::debug!(?region, "imports array located");

    if region.open_line == region.close_line {
        return insert_inline(lines, region, entry);
    }

    // Scan bottom-to-top for the last line that denotes a registration,
    // skipping blank lines and line comments. Entries may trail the opening
    // bracket or precede the closing bracket on the bracket lines.
    let mut anchor: Option<usize> = None;
    for i in (region.open_line..=region.close_line).rev() {
        let content = if i == region.open_line {
            &lines[i][region.open_col + 1..]
        } else if i == region.close_line {
            &lines[i][..region.close_col]
        } else {
            lines[i].as_str()
        };
        let trimmed = content.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if REGISTRATION.is_match(trimmed) {
            anchor = Some(i);
            break;
        }
    }
    let Some(i) = anchor else {
        return InsertOutcome::NoAnchor;
    };

    if i == region.close_line {
        // Last entry shares a line with the closing bracket; splice the new
        // entry in before the bracket. A trailing comma on the existing entry
        // is reused rather than doubled.
        let prefix = lines[i][..region.close_col].trim_end();
        let separator = if prefix.ends_with(',') { " " } else { ", " };
        let before = prefix.len();
        lines[i].insert_str(before, &format!("{separator}{entry}"));
        return InsertOutcome::Inserted;
    }

    // Keep the list well-formed: the anchor entry must be comma-terminated
    // before a sibling is appended after it.
    if !lines[i].trim_end().ends_with(',') {
        lines[i] = format!("{},", lines[i].trim_end());
    }
    let indent = if i == region.open_line {
        sibling_indent(lines, region)
    } else {
        leading_whitespace(&lines[i]).to_string()
    };
    lines.insert(i + 1, format!("{indent}{entry},"));
    InsertOutcome::Inserted
}

/// Patch a single-line array such as `imports: [FooModule]` in place,
/// yielding `imports: [FooModule, BarModule]`.
fn insert_inline(lines: &mut [String], region: ArrayRegion, entry: &str) -> InsertOutcome {
    let interior = &lines[region.open_line][region.open_col + 1..region.close_col];
    let Some(end) = last_registration_end(interior) else {
        return InsertOutcome::NoAnchor;
    };
    let pos = region.open_col + 1 + end;
    lines[region.open_line].insert_str(pos, &format!(", {entry}"));
    InsertOutcome::Inserted
}

/// Byte offset just past the last comma-separated segment of `interior`
/// that denotes a registration, or `None` if no segment qualifies.
fn last_registration_end(interior: &str) -> Option<usize> {
    let mut depth = 0i32;
    let mut seg_start = 0usize;
    let mut result = None;
    let mut segments: Vec<(usize, usize)> = Vec::new();
    for (i, ch) in interior.char_indices() {
        match ch {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth -= 1,
            ',' if depth == 0 => {
                segments.push((seg_start, i));
                seg_start = i + 1;
            }
            _ => {}
        }
    }
    segments.push((seg_start, interior.len()));
    for (start, end) in segments {
        let seg = &interior[start..end];
        if REGISTRATION.is_match(seg) {
            result = Some(start + seg.trim_end().len());
        }
    }
    result
}

/// Locate the first `imports: [` and its matching `]` with a bracket-depth
/// scan, so nested brackets inside entries (e.g. `forFeature([User])`) do
/// not terminate the region early.
fn find_imports_array(lines: &[String]) -> Option<ArrayRegion> {
    let (open_line, open_col) = lines
        .iter()
        .enumerate()
        .find_map(|(i, l)| IMPORTS_OPEN.find(l).map(|m| (i, m.end() - 1)))?;

    let mut depth = 0i32;
    for (i, line) in lines.iter().enumerate().skip(open_line) {
        let start = if i == open_line { open_col } else { 0 };
        for (col, ch) in line.char_indices() {
            if col < start {
                continue;
            }
            match ch {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(ArrayRegion {
                            open_line,
                            open_col,
                            close_line: i,
                            close_col: col,
                        });
                    }
                }
                _ => {}
            }
        }
    }
    // Unbalanced brackets: refuse to guess.
    None
}

/// Indentation for a new entry appended right after the opening bracket
/// line: reuse the first interior line's indent, or widen the opening
/// line's by one level.
fn sibling_indent(lines: &[String], region: ArrayRegion) -> String {
    for line in lines
        .iter()
        .take(region.close_line)
        .skip(region.open_line + 1)
    {
        if !line.trim().is_empty() {
            return leading_whitespace(line).to_string();
        }
    }
    format!("{}    ", leading_whitespace(&lines[region.open_line]))
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
