//! HTML page shell shared by every portal page.

use axum::response::Html;
use nexglab_locale::{Key, Locale, LocaleStore, PreferenceStore};

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Page being rendered: its localized texts and where it lives.
pub struct Page<'a, S> {
    pub locale: &'a LocaleStore<S>,
    pub path: &'a str,
}

impl<'a, S: PreferenceStore> Page<'a, S> {
    pub fn new(locale: &'a LocaleStore<S>, path: &'a str) -> Self {
        Self { locale, path }
    }

    /// Escaped translation.
    pub fn t(&self, key: Key) -> String {
        escape(self.locale.text(key))
    }

    pub fn back_link(&self, href: &str) -> String {
        format!(
            "<a class=\"back\" href=\"{}\">← {}</a>",
            escape(href),
            self.t(Key::Back)
        )
    }

    fn language_switcher(&self) -> String {
        let active = self.locale.locale();
        let mut html = format!(
            "<form class=\"language\" method=\"post\" action=\"/language\">\
             <input type=\"hidden\" name=\"redirect\" value=\"{}\">\
             <span>{}</span>",
            escape(self.path),
            self.t(Key::Language)
        );
        for locale in Locale::ALL {
            let current = if locale == active {
                " aria-current=\"true\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<button type=\"submit\" name=\"language\" value=\"{}\"{}>{} {}</button>",
                locale.code(),
                current,
                locale.flag(),
                escape(locale.native_name())
            ));
        }
        html.push_str("</form>");
        html
    }

    /// Wrap `body` in the document shell. The root element carries the
    /// store's `lang` and `dir` attributes.
    pub fn render(&self, title: &str, body: &str) -> Html<String> {
        Html(format!(
            "<!DOCTYPE html>\n\
             <html {attrs}>\n\
             <head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>NEXGlab · {title}</title></head>\n\
             <body>\n\
             <header><a class=\"brand\" href=\"/\">NEXGlab</a><p>{subtitle}</p>{switcher}</header>\n\
             <main>\n{body}\n</main>\n\
             <footer><p>{copyright}</p></footer>\n\
             </body>\n\
             </html>\n",
            attrs = self.locale.document().to_html_attrs(),
            title = escape(title),
            subtitle = self.t(Key::Subtitle),
            switcher = self.language_switcher(),
            body = body,
            copyright = self.t(Key::Copyright),
        ))
    }
}

/// Email form used by every gate. `error` is rendered inline when present.
pub fn email_form(
    action: &str,
    label: &str,
    placeholder: &str,
    submit: &str,
    value: &str,
    error: Option<&str>,
) -> String {
    let error_html = error
        .map(|message| format!("<p class=\"error\" role=\"alert\">{}</p>", escape(message)))
        .unwrap_or_default();

    format!(
        "<form class=\"gate\" method=\"post\" action=\"{action}\">\
         <label for=\"email\">{label}</label>\
         <input id=\"email\" name=\"email\" type=\"text\" inputmode=\"email\" autocomplete=\"email\" placeholder=\"{placeholder}\" value=\"{value}\" required>\
         {error_html}\
         <button type=\"submit\">{submit}</button>\
         </form>",
        action = escape(action),
        label = escape(label),
        placeholder = escape(placeholder),
        value = escape(value),
        submit = escape(submit),
    )
}
