use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-3 rounded-xl border py-5 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-5"}
    clx! {CardTitle, h2, "leading-snug font-semibold break-words"}
    clx! {CardDescription, p, "text-muted-foreground text-xs"}
    clx! {CardContent, div, "px-5 text-sm whitespace-pre-wrap break-words"}
    clx! {CardFooter, footer, "mt-auto flex items-center justify-between px-5", "gap-2"}

    // Responsive grid of note cards.
    clx! {CardGrid, ul, "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3"}
}

pub use components::*;
