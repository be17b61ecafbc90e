use html_escape::encode_text;

const INTEGER_TOLERANCE: f64 = 1e-9;

/// Escape text for embedding in element content: `&`, `<` and `>` only.
pub fn escape(text: &str) -> String {
    encode_text(text).into_owned()
}

/// Whole values print without decimals, everything else with one. Ties round
/// away from zero.
pub fn format_duration(seconds: f64) -> String {
    let rounded = seconds.round();
    if (seconds - rounded).abs() < INTEGER_TOLERANCE {
        format!("{} seconds", rounded as i64)
    } else {
        format!("{:.1} seconds", (seconds * 10.0).round() / 10.0)
    }
}

/// Builds a fragment where only `&'static str` markup is inserted verbatim.
///
/// Any runtime text goes through [`FragmentBuilder::text`], so a value from the
/// user or the backend cannot reach the output unescaped.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    output: String,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(mut self, markup: &'static str) -> Self {
        self.output.push_str(markup);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.output.push_str(&encode_text(text));
        self
    }

    pub fn strong(self, text: &str) -> Self {
        self.markup("<strong>").text(text).markup("</strong>")
    }

    pub fn ordered_list<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .fold(self.markup("<ol>"), |builder, item| {
                builder.markup("<li>").text(item.as_ref()).markup("</li>")
            })
            .markup("</ol>")
    }

    pub fn finish(self) -> String {
        self.output
    }
}
