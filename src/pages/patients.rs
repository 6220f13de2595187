//! Patient List Page
//!
//! Tabular patient view with sortable columns and a text filter, refreshed
//! on the configured interval. Rows link to the patient detail page.

use leptos::*;
use leptos_router::*;

use crate::format::date_dd_mmm_yyyy;
use crate::model::PatientSummary;
use crate::pages::use_patient_polling;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    NhsNumber,
    Name,
    DateOfBirth,
    Status,
}

/// Sort in place. Date of birth orders by the raw epoch value, not its
/// display string.
pub fn sort_patients(list: &mut [PatientSummary], column: SortColumn, descending: bool) {
    list.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::NhsNumber => a.nhs_number.cmp(&b.nhs_number),
            SortColumn::Name => a.full_name().cmp(&b.full_name()),
            SortColumn::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            SortColumn::Status => a.critical.cmp(&b.critical),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Case-insensitive match against NHS number, name and displayed date of
/// birth.
pub fn filter_patients(list: &[PatientSummary], query: &str) -> Vec<PatientSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return list.to_vec();
    }
    list.iter()
        .filter(|p| {
            p.nhs_number.to_lowercase().contains(&query)
                || p.full_name().to_lowercase().contains(&query)
                || date_dd_mmm_yyyy(p.date_of_birth).to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[component]
pub fn PatientList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    use_patient_polling();

    let patients = state.patients;
    let (filter, set_filter) = create_signal(String::new());
    let (sort_column, set_sort_column) = create_signal(SortColumn::Name);
    let (descending, set_descending) = create_signal(false);

    let rows = create_memo(move |_| {
        let mut list = filter_patients(&patients.get(), &filter.get());
        sort_patients(&mut list, sort_column.get(), descending.get());
        list
    });

    let on_sort = move |column: SortColumn| {
        if sort_column.get_untracked() == column {
            set_descending.update(|d| *d = !*d);
        } else {
            set_sort_column.set(column);
            set_descending.set(false);
        }
    };

    view! {
        <div class="page">
            <h1 class="page-title">"Patient List"</h1>

            <input
                type="text"
                class="table-filter"
                placeholder="Search patients"
                prop:value=move || filter.get()
                on:input=move |ev| set_filter.set(event_target_value(&ev))
            />

            <table class="patient-table">
                <thead>
                    <tr>
                        <SortHeader label="NHS number" column=SortColumn::NhsNumber on_sort=on_sort />
                        <SortHeader label="Name" column=SortColumn::Name on_sort=on_sort />
                        <SortHeader label="Date of birth" column=SortColumn::DateOfBirth on_sort=on_sort />
                        <SortHeader label="Status" column=SortColumn::Status on_sort=on_sort />
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|patient| view! { <PatientRow patient=patient /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SortHeader(
    label: &'static str,
    column: SortColumn,
    on_sort: impl Fn(SortColumn) + Copy + 'static,
) -> impl IntoView {
    view! {
        <th scope="col" class="sortable" on:click=move |_| on_sort(column)>
            {label}
        </th>
    }
}

#[component]
fn PatientRow(patient: PatientSummary) -> impl IntoView {
    let href = format!("/patient/{}", patient.patient_uuid);
    let dob = date_dd_mmm_yyyy(patient.date_of_birth);
    let indicator = if patient.critical {
        "status-dot red"
    } else {
        "status-dot green"
    };

    let nhs_number = patient.nhs_number.clone();
    let full_name = patient.full_name();

    view! {
        <tr>
            <td><A href=href.clone()>{nhs_number}</A></td>
            <td><A href=href.clone()>{full_name}</A></td>
            <td>{dob}</td>
            <td><A href=href><span class=indicator /></A></td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PatientStatus;

    fn patient(nhs: &str, first: &str, last: &str, dob: i64, critical: bool) -> PatientSummary {
        PatientSummary {
            patient_uuid: format!("uuid-{}", nhs),
            nhs_number: nhs.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: dob,
            critical,
            patient_status: PatientStatus::InThreshold,
        }
    }

    #[test]
    fn test_sort_by_name_and_reverse() {
        let mut list = vec![
            patient("2", "Cara", "Young", 0, false),
            patient("1", "Ada", "Byron", 0, true),
        ];
        sort_patients(&mut list, SortColumn::Name, false);
        assert_eq!(list[0].first_name, "Ada");

        sort_patients(&mut list, SortColumn::Name, true);
        assert_eq!(list[0].first_name, "Cara");
    }

    #[test]
    fn test_sort_by_date_of_birth_uses_epoch() {
        let mut list = vec![
            patient("1", "A", "A", 500_000_000_000, false),
            patient("2", "B", "B", 100_000_000_000, false),
        ];
        sort_patients(&mut list, SortColumn::DateOfBirth, false);
        assert_eq!(list[0].nhs_number, "2");
    }

    #[test]
    fn test_filter_matches_name_nhs_and_dob() {
        let list = vec![
            patient("943 476 5919", "Ada", "Byron", 499651200000, true), // 1985-11-01
            patient("123 456 7890", "Cara", "Young", 0, false),
        ];

        assert_eq!(filter_patients(&list, "byron").len(), 1);
        assert_eq!(filter_patients(&list, "943").len(), 1);
        assert_eq!(filter_patients(&list, "nov-1985").len(), 1);
        assert_eq!(filter_patients(&list, "").len(), 2);
        assert_eq!(filter_patients(&list, "zzz").len(), 0);
    }
}
