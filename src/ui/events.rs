use crate::models::Event;
use crate::utils::table::Table;

pub fn event_table(events: &[Event]) -> Table {
    let mut table = Table::new(["ID", "WHEN", "TYPE", "TITLE", "LOCATION", "TEAM", "VISIBILITY"]);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.time_range(),
            ev.kind.et_as_str().to_string(),
            ev.title.clone(),
            ev.location.clone(),
            ev.team_id.map(|t| t.to_string()).unwrap_or_else(|| "-".into()),
            ev.visibility.as_str().to_string(),
        ]);
    }

    table
}
