//! Renders the view model into the grid's markup.
//!
//! Titles and summaries are trusted page content and go out raw; urls,
//! category labels and the all-text are escaped.

use careers_core::{AppViewModel, CardView, FilterListView};

use super::constants::*;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("<div class=\"{CLASS_MAIN}\">\n"));
    render_filters(&mut out, &view.filters);
    render_grid(&mut out, &view.cards);
    out.push_str("</div>\n");
    out
}

fn render_filters(out: &mut String, filters: &FilterListView) {
    let mut classes = vec![CLASS_FILTERS];
    if filters.backdrop {
        classes.push(CLASS_FILTERS_BACKDROP);
    }
    if filters.drawer_open {
        classes.push(CLASS_DRAWER_OPEN);
    }

    out.push_str(&format!("  <div class=\"{}\">\n", classes.join(" ")));
    out.push_str(&format!(
        "    <a class=\"{CLASS_DRAWER}\" data-drawer-toggle=\"{}\">\
         <span class=\"{CLASS_DRAWER_HEADING}\">{DRAWER_HEADING}</span>\
         <span class=\"{CLASS_DRAWER_SELECTED}\">{}</span></a>\n",
        !filters.drawer_open,
        escape(&filters.selected_label)
    ));
    out.push_str(&format!(
        "    <div class=\"{CLASS_FILTER_LIST_WRAP}\">\n      <ul class=\"{CLASS_FILTER_LIST}\">\n"
    ));
    for entry in &filters.entries {
        let class = if entry.active {
            format!(" class=\"{CLASS_FILTER_ACTIVE}\"")
        } else {
            String::new()
        };
        out.push_str(&format!(
            "        <li><a{class} data-category=\"{}\"><span>{}</span></a></li>\n",
            escape(&entry.value),
            escape(&entry.label)
        ));
    }
    out.push_str("      </ul>\n    </div>\n  </div>\n");
}

fn render_grid(out: &mut String, cards: &[CardView]) {
    out.push_str(&format!("  <ul class=\"{CLASS_GRID}\">\n"));
    for card in cards {
        render_card(out, card);
    }
    out.push_str("  </ul>\n");
}

fn render_card(out: &mut String, card: &CardView) {
    let class = if card.last {
        format!("{CLASS_CARD} {CLASS_CARD_LAST}")
    } else {
        CLASS_CARD.to_string()
    };
    out.push_str(&format!(
        "    <li class=\"{class}\" style=\"width: {}\" data-key=\"{}\">\
         <a class=\"{CLASS_CARD_INNER}\" href=\"{}\">\
         <h2 class=\"{CLASS_CARD_TITLE}\">{}</h2>\
         <p class=\"{CLASS_CARD_DESCRIPTION}\">{}</p></a></li>\n",
        escape(&card.card_width),
        card.id,
        escape(&card.url),
        card.title,
        card.summary
    ));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use careers_core::{update, AppState, ListingDraft, Msg};

    fn mounted_view(drafts: Vec<ListingDraft>) -> AppViewModel {
        let (state, _) = update(
            AppState::new(),
            Msg::Mounted {
                listings: drafts,
                categories: vec!["R&D".to_string(), "Sales".to_string()],
            },
        );
        state.view()
    }

    fn job(title: &str, url: &str) -> ListingDraft {
        ListingDraft {
            title: title.to_string(),
            summary: "<b>Remote</b>".to_string(),
            url: url.to_string(),
            categories: Some("Sales".to_string()),
        }
    }

    #[test]
    fn cards_render_raw_markup_and_escaped_urls() {
        let html = render(&mounted_view(vec![job(
            "<em>Lead</em>",
            "/jobs?id=1&ref=\"x\"",
        )]));
        assert!(html.contains("<h2 class=\"gsf-career-title\"><em>Lead</em></h2>"));
        assert!(html.contains("<p class=\"gsf-career-description\"><b>Remote</b></p>"));
        assert!(html.contains("href=\"/jobs?id=1&amp;ref=&quot;x&quot;\""));
    }

    #[test]
    fn only_final_card_is_marked_last() {
        let html = render(&mounted_view(vec![job("A", "/a"), job("B", "/b")]));
        assert_eq!(html.matches(CLASS_CARD_LAST).count(), 1);
        let last_at = html.find(CLASS_CARD_LAST).unwrap();
        assert!(html[last_at..].contains(">B</h2>"));
    }

    #[test]
    fn filter_list_has_all_entry_then_categories() {
        let html = render(&mounted_view(vec![job("A", "/a")]));
        let all = html.find("<span>All Jobs</span>").unwrap();
        let rnd = html.find("<span>R&amp;D</span>").unwrap();
        let sales = html.find("<span>Sales</span>").unwrap();
        assert!(all < rnd && rnd < sales);
        assert!(html.contains("<li><a class=\"gsf-filter-active\" data-category=\"\">"));
        assert!(html.contains("<span class=\"gsf-mobile-filters-selected\">All Jobs</span>"));
        assert!(!html.contains(CLASS_FILTERS_BACKDROP));
        assert!(!html.contains(CLASS_DRAWER_OPEN));
    }

    #[test]
    fn placeholder_renders_as_single_card() {
        let html = render(&mounted_view(Vec::new()));
        assert_eq!(html.matches("<li class=\"gsf-career-listing").count(), 1);
        assert!(html.contains("There are no current career listings that match your criteria."));
        assert!(html.contains("data-key=\"placeholder\""));
    }
}
