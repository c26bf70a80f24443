use icons::{ChevronLeft, ChevronRight};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::state::{PageItem, Pagination, PaginationError};

/// Applies one pager move. A rejected move is logged and leaves `p` as it was.
fn move_page(
    p: &mut Pagination,
    step: impl FnOnce(&mut Pagination) -> Result<(), PaginationError>,
) -> bool {
    match step(p) {
        Ok(()) => true,
        Err(e) => {
            warn!("[pagination] {e}");
            false
        }
    }
}

/// Pager for the notes list. Only the caller decides whether it is shown.
#[component]
pub(crate) fn PaginationControls(pagination: RwSignal<Pagination>) -> impl IntoView {
    let go_to = move |page: u32| {
        pagination.update(|p| {
            move_page(p, |p| p.set_page(page));
        });
    };

    view! {
        <nav data-name="Pagination" aria-label="Pagination" class="flex items-center gap-1">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Previous page"
                attr:disabled=move || !pagination.with(Pagination::has_prev)
                on:click=move |_| pagination.update(|p| {
                    move_page(p, Pagination::prev);
                })
            >
                <ChevronLeft />
            </Button>

            {move || {
                let current = pagination.with(Pagination::page);
                pagination
                    .with(Pagination::page_items)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => {
                            let variant = if n == current {
                                ButtonVariant::Active
                            } else {
                                ButtonVariant::Ghost
                            };
                            view! {
                                <Button
                                    variant=variant
                                    size=ButtonSize::Page
                                    attr:aria-label=format!("Page {n}")
                                    on:click=move |_| go_to(n)
                                >
                                    {n}
                                </Button>
                            }
                            .into_any()
                        }
                        PageItem::Ellipsis => view! {
                            <span class="px-1 text-sm text-muted-foreground" aria-hidden="true">
                                "…"
                            </span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Next page"
                attr:disabled=move || !pagination.with(Pagination::has_next)
                on:click=move |_| pagination.update(|p| {
                    move_page(p, Pagination::next);
                })
            >
                <ChevronRight />
            </Button>
        </nav>
    }
}
