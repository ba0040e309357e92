use crate::width::{StyledText, WidthMeasure};

/// Pad `value` with trailing spaces until it spans `columns`. Values already
/// that wide or wider come back unchanged.
pub fn pad_to(value: &StyledText, columns: usize) -> StyledText {
    let missing = columns.saturating_sub(value.width());
    if missing == 0 {
        return value.clone();
    }
    let mut text = String::with_capacity(value.as_str().len() + missing);
    text.push_str(value.as_str());
    text.extend(std::iter::repeat_n(' ', missing));
    StyledText::new(text, value.width() + missing)
}

/// Cut plain `text` so it fits in `columns`. A wide character that would
/// straddle the limit is dropped whole; zero-width characters stay attached
/// to whatever precedes them.
///
/// The whole prefix is re-measured for every character because some
/// sequences (an emoji plus U+FE0F, for one) are wider together than the sum
/// of their parts.
pub fn truncate_plain<M>(text: &str, columns: usize, measurer: &M) -> String
where
    M: WidthMeasure + ?Sized,
{
    let mut out = String::new();

    for ch in text.chars() {
        out.push(ch);
        if measurer.measure(&out) > columns {
            out.pop();
            break;
        }
    }

    out
}

/// Widest cell per column across `rows`; ragged rows are fine.
pub fn column_widths<R>(rows: &[R]) -> Vec<usize>
where
    R: AsRef<[StyledText]>,
{
    let mut widths = Vec::new();
    for row in rows {
        for (idx, cell) in row.as_ref().iter().enumerate() {
            if idx == widths.len() {
                widths.push(0);
            }
            widths[idx] = widths[idx].max(cell.width());
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::bold;
    use crate::width::{UnicodeWidth, UnicodeWidthCjk, WidthMeasure};

    #[test]
    fn pad_uses_carried_width() {
        let padded = pad_to(&bold("ab"), 4);
        assert_eq!(padded.width(), 4);
        assert_eq!(padded.as_str(), "\x1b[1mab\x1b[0m  ");
    }

    #[test]
    fn pad_never_shrinks() {
        let value = StyledText::plain("abcdef");
        assert_eq!(pad_to(&value, 3), value);
    }

    #[test]
    fn truncate_keeps_wide_characters_whole() {
        assert_eq!(truncate_plain("日本語", 5, &UnicodeWidth), "日本");
        assert_eq!(truncate_plain("hello", 3, &UnicodeWidth), "hel");
        assert_eq!(truncate_plain("hi", 10, &UnicodeWidth), "hi");
        assert_eq!(truncate_plain("±±", 3, &UnicodeWidthCjk), "±");
    }

    #[test]
    fn truncate_keeps_combining_marks() {
        assert_eq!(truncate_plain("e\u{301}x", 1, &UnicodeWidth), "e\u{301}");
    }

    #[test]
    fn truncate_respects_sequence_width() {
        for budget in 0..4 {
            let cut = truncate_plain("\u{2764}\u{fe0f}x", budget, &UnicodeWidth);
            assert!(UnicodeWidth.measure(&cut) <= budget, "{budget}: {cut:?}");
        }
        assert!(truncate_plain("\u{2764}\u{fe0f}x", 1, &UnicodeWidth).starts_with('\u{2764}'));
    }

    #[test]
    fn widths_span_ragged_rows() {
        let rows = vec![
            vec![StyledText::plain("a"), bold("漢字")],
            vec![StyledText::plain("abc")],
        ];
        assert_eq!(column_widths(&rows), vec![3, 4]);
    }
}
