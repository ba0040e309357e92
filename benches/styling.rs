use std::hint::black_box;
use std::io;

use criterion::{Criterion, criterion_group, criterion_main};
use escapes::logging::{LogEvent, LogSink};
use escapes::{
    LineWriter, Logger, LoggingResult, Rgb, Style, StyledText, Theme, bold, colorized, hyperlink,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

const THEME: &str = r##"{
    "styles": {
        "key": { "bold": true },
        "value": { "fg": "#5fafff" },
        "alert": { "fg": "#ffffff", "bg": "#d70000", "underline": true }
    }
}"##;

fn formatting(c: &mut Criterion) {
    let red = Rgb::new(255, 0, 0);
    let blue = Rgb::new(0, 0, 255);

    c.bench_function("bold_ascii", |b| b.iter(|| bold(black_box("status: ok"))));
    c.bench_function("colorized_both_cjk", |b| {
        b.iter(|| colorized(black_box("漢字テキスト"), Some(&red), Some(&blue)))
    });
    c.bench_function("hyperlink", |b| {
        b.iter(|| hyperlink(black_box("https://example.com/docs"), black_box("docs")))
    });
    c.bench_function("composite_style", |b| {
        let style = Style::new().bold().italic().fg(red).bg(blue);
        b.iter(|| style.paint(black_box("composite")))
    });
}

fn table_render(c: &mut Criterion) {
    let theme = Theme::from_json_str(THEME).expect("theme");
    let rows: Vec<Vec<StyledText>> = (0..64)
        .map(|i| {
            let style = if i % 7 == 0 { "alert" } else { "value" };
            vec![
                theme.paint("key", &format!("row-{i}")),
                theme.paint(style, &"値".repeat(i % 5 + 1)),
                StyledText::plain(format!("{}", i * 31)),
            ]
        })
        .collect();

    c.bench_function("table_render_64_rows", |b| {
        b.iter(|| {
            let mut writer = LineWriter::with_default(io::sink()).with_logger(Logger::new(NullSink));
            writer.write_table(black_box(&rows)).expect("table");
            writer.finish().expect("finish");
        })
    });
}

criterion_group!(benches, formatting, table_render);
criterion_main!(benches);
