//! Line and column lookup for spans.

/// Byte offset of every line start, for repeated line/column lookups.
///
/// ```
/// use quill_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "let a = 1;\nlet b = a;";
/// let table = LineOffsetTable::build(source);
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 15), (2, 5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> usize {
        let offset = offset as usize;
        match self.offsets.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert,
        }
    }

    /// 1-based `(line, column)` of `offset`; columns count characters.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let start = self.offsets.get(line - 1).copied().unwrap_or(0);
        let end = (offset as usize).clamp(start, source.len());
        let column = source
            .get(start..end)
            .map_or(end - start, |prefix| prefix.chars().count());
        (line, column + 1)
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> &'s str {
        let Some(&start) = self.offsets.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self.offsets.get(line).map_or(source.len(), |next| next - 1);
        source
            .get(start..end.max(start))
            .unwrap_or("")
            .trim_end_matches('\r')
    }
}
