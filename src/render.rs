use crate::domain::View;
use std::fmt::Write;

pub fn render(view: &View) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &View) -> std::fmt::Result {
    writeln!(out, "Number of locations: {}", view.location_count())?;

    match view {
        View::Loading { .. } => writeln!(out, "LOADING...")?,
        View::Ready { results, user, .. } => {
            if results.is_empty() {
                writeln!(out, "No locations found")?;
            }
            for location in results {
                writeln!(out, "{}", location.name)?;
                writeln!(out, "  {}", location.lat)?;
                writeln!(out, "  {}", location.long)?;
            }
            writeln!(out, "Your coordinates:")?;
            writeln!(out, "  {}", user.lat)?;
            writeln!(out, "  {}", user.long)?;
        }
    }

    Ok(())
}
