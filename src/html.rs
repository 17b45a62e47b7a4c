//! HTML citation rendering.
use crate::ads::Document;
use crate::names::initialize_authors;
use chrono::Month;
use once_cell::sync::Lazy;
use regex::Regex;

const DOI_RESOLVER_URL: &str = "http://dx.doi.org/";
const ADS_ABSTRACT_URL: &str = "http://adsabs.harvard.edu/abs/";

// ADS pubdates look like "2019-09-00"; day and month may be zero.
static PUBDATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})").expect("valid pubdate regex"));

/// Three-letter English month abbreviation for an ADS pubdate.
pub fn month_abbreviation(pubdate: &str) -> Option<&'static str> {
    let captures = PUBDATE_REGEX.captures(pubdate)?;
    let month: u8 = captures[2].parse().ok()?;
    let name = Month::try_from(month).ok()?.name();
    name.get(..3)
}

fn publication_year(doc: &Document) -> &str {
    if let Some(year) = doc.year.as_deref() {
        return year;
    }
    doc.pubdate
        .as_deref()
        .and_then(|pubdate| PUBDATE_REGEX.captures(pubdate))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Renders a single document as an HTML paragraph.
pub fn render_citation(doc: &Document) -> String {
    let mut html = String::from("<p>\n");

    html.push_str("<strong>");
    html.push_str(doc.title.first().map(String::as_str).unwrap_or(""));
    html.push_str("</strong>\n");

    html.push_str(&initialize_authors(&doc.author));
    html.push('\n');

    html.push_str("<em>");
    if let Some(publication) = &doc.publication {
        html.push_str(publication);
        html.push_str(", ");
    }
    if let Some(month) = doc.pubdate.as_deref().and_then(month_abbreviation) {
        html.push_str(month);
        html.push(' ');
    }
    html.push_str(publication_year(doc));
    html.push_str("</em>\n");

    if let Some(doi) = doc.doi.first() {
        html.push_str(&format!(
            "<a href=\"{}{}\" target=\"_blank\">DOI</a>\n",
            DOI_RESOLVER_URL, doi
        ));
    }
    html.push_str(&format!(
        "<a href=\"{}{}\" target=\"_blank\">ADS URL</a>\n",
        ADS_ABSTRACT_URL, doc.bibcode
    ));

    html.push_str("</p>\n");
    html
}

/// Renders every document, in order.
pub fn render_html(docs: &[Document]) -> String {
    docs.iter().map(render_citation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            bibcode: "1929PNAS...15..168H".to_string(),
            title: vec!["A Relation between Distance and Radial Velocity".to_string()],
            author: vec!["Hubble, Edwin".to_string()],
            publication: Some("Proceedings of the National Academy of Science".to_string()),
            pubdate: Some("1929-03-00".to_string()),
            year: Some("1929".to_string()),
            doi: vec!["10.1073/pnas.15.3.168".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_month_abbreviation() {
        assert_eq!(month_abbreviation("1929-03-00"), Some("Mar"));
        assert_eq!(month_abbreviation("2020-09-15"), Some("Sep"));
        assert_eq!(month_abbreviation("2020-12"), Some("Dec"));
        assert_eq!(month_abbreviation("2020-00-00"), None);
        assert_eq!(month_abbreviation("2020-13-00"), None);
        assert_eq!(month_abbreviation("garbage"), None);
    }

    #[test]
    fn test_render_full_citation() {
        let expected = "<p>\n\
<strong>A Relation between Distance and Radial Velocity</strong>\n\
Hubble, E.\n\
<em>Proceedings of the National Academy of Science, Mar 1929</em>\n\
<a href=\"http://dx.doi.org/10.1073/pnas.15.3.168\" target=\"_blank\">DOI</a>\n\
<a href=\"http://adsabs.harvard.edu/abs/1929PNAS...15..168H\" target=\"_blank\">ADS URL</a>\n\
</p>\n";
        assert_eq!(render_citation(&sample_document()), expected);
    }

    #[test]
    fn test_render_without_optional_fields() {
        let doc = Document {
            bibcode: "2020arXiv200100001X".to_string(),
            title: vec!["Preprint".to_string()],
            author: vec!["Doe, Jane Q.".to_string(), "Roe, R.".to_string()],
            pubdate: Some("2020-00-00".to_string()),
            ..Default::default()
        };
        let html = render_citation(&doc);
        assert!(html.contains("Doe, J.Q., Roe, R.\n"));
        assert!(html.contains("<em>2020</em>\n"));
        assert!(!html.contains("DOI"));
        assert!(html.ends_with("ADS URL</a>\n</p>\n"));
    }

    #[test]
    fn test_render_empty_document() {
        let doc = Document {
            bibcode: "B".to_string(),
            ..Default::default()
        };
        let html = render_citation(&doc);
        assert!(html.starts_with("<p>\n<strong></strong>\n\n<em></em>\n"));
    }

    #[test]
    fn test_render_html_keeps_order() {
        let mut second = sample_document();
        second.bibcode = "SECOND".to_string();
        let html = render_html(&[sample_document(), second]);
        let first_pos = html.find("1929PNAS").unwrap();
        let second_pos = html.find("SECOND").unwrap();
        assert!(first_pos < second_pos);
        assert_eq!(html.matches("<p>").count(), 2);
        assert_eq!(render_html(&[]), "");
    }
}
