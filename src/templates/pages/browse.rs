use crate::domain::{FilterCriteria, FilterField, FilterProfile, ValidationErrors};
use crate::search::{Display, Notice};
use crate::templates::{desktop_layout, field_error, no_results, notice_list, property_card};
use maud::{html, Markup};

pub struct BrowseVm<'a> {
    pub display: Display<'a>,
    pub profile: FilterProfile,
    pub criteria: &'a FilterCriteria,
    pub errors: &'a ValidationErrors,
    pub search_query: &'a str,
    pub listening: bool,
    pub voice_available: bool,
    pub notices: Vec<Notice>,
}

fn filter_input(vm: &BrowseVm<'_>, field: FilterField) -> Markup {
    let name = field.wire_name();
    let current = vm.criteria.get(field).unwrap_or("");
    let kind = match field {
        FilterField::MinPrice | FilterField::MaxPrice => "number",
        _ => "text",
    };

    html! {
        @if field.choices().is_empty() {
            input type=(kind) name=(name) placeholder=(field.label()) value=(current);
        } @else {
            select name=(name) {
                option value="" { (field.label()) }
                @for n in field.choices() {
                    @let value = n.to_string();
                    option value=(value) selected[current == value] {
                        (n) " " (field.label().trim_end_matches('s'))
                        @if *n > 1 { "s" }
                    }
                }
            }
        }
        (field_error(vm.errors, field))
    }
}

pub fn browse_page(vm: &BrowseVm<'_>) -> Markup {
    desktop_layout(
        "Listings",
        html! {
            main class="container" {
                (notice_list(&vm.notices))

                div class="search-container" {
                    form class="search-bar-wrapper" method="get" action="/search" {
                        input
                            type="text"
                            name="q"
                            placeholder="Search properties..."
                            value=(vm.search_query)
                            class="search-bar";
                        button type="submit" { "Search" }
                    }
                    @if vm.listening {
                        form method="post" action="/voice/stop" {
                            span class="listening" role="status" { "Listening…" }
                            button type="submit" class="voice-button" aria-label="Stop voice search" { "Stop" }
                        }
                    } @else {
                        form method="post" action="/voice" {
                            button
                                type="submit"
                                class="voice-button"
                                aria-label="Start voice search"
                                data-voice=[(!vm.voice_available).then_some("unavailable")]
                            { "🎤" }
                        }
                    }
                }

                div class="filter-layout" {
                    form class="filter-sidebar" method="get" action="/filter" {
                        div class="filters" {
                            @for field in vm.profile.fields() {
                                (filter_input(vm, *field))
                            }
                            button type="submit" { "Search" }
                        }
                    }

                    div class="property-results" {
                        @match &vm.display {
                            Display::Listings(listings) => {
                                @for property in listings.iter() {
                                    (property_card(property))
                                }
                            }
                            Display::NoResults => {
                                (no_results())
                            }
                        }
                    }
                }
            }
        },
    )
}
