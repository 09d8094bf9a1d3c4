//! Seating chart controller.
//!
//! [`SeatingController`] owns the roster, the seats and the arrangement archive.
//! It talks to the outside world only through three injected collaborators: a
//! [`PresentationSurface`], a [`DialogService`] and a [`KeyValueStore`]. Every
//! operation applies its state change in one step after all dialogs have been
//! answered, so a dismissed dialog never leaves a partial mutation behind.

pub mod dialogs;
pub mod surface;


use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::SEAT_COUNT;
use crate::models::{
    Arrangement, ArrangementArchive, Roster, RosterEntry, Seat, SeatCounts, SeatPosition,
};
use crate::services::roster_list::{self, RosterSubmission};
use crate::services::shuffle::shuffled;
use crate::services::store::{self, KeyValueStore};

pub use dialogs::{
    validate_arrangement_name, validate_student_name, Confirmation, ConfirmPrompt, DialogService,
    Notice, NoticeLevel, SelectOption, SelectPrompt, TextPrompt, Tone,
};
pub use surface::{PresentationSurface, RosterEditRequest};

/// Result of submitting a roster list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterApplyOutcome {
    /// The roster was replaced
    Applied,
    /// The list was empty; nothing changed
    Rejected,
    /// The user backed out of a confirmation; nothing changed
    Cancelled,
}

/// Mediates between the seat grid, dialogs and storage.
pub struct SeatingController<P, D, S> {
    surface: P,
    dialogs: D,
    store: S,
    roster: Roster,
    seats: Vec<Seat>,
    archive: ArrangementArchive,
    rng: StdRng,
}

impl<P, D, S> SeatingController<P, D, S>
where
    P: PresentationSurface,
    D: DialogService,
    S: KeyValueStore,
{
    /// Creates a controller seeded from the OS random source.
    pub fn new(surface: P, dialogs: D, store: S) -> Result<Self> {
        Self::with_rng(surface, dialogs, store, StdRng::from_os_rng())
    }

    /// Creates a controller with an explicit random source.
    ///
    /// Seats start filled with the placeholder roster in order, the archive is
    /// read from `store` and the surface receives its first render.
    pub fn with_rng(surface: P, dialogs: D, store: S, rng: StdRng) -> Result<Self> {
        let roster = Roster::placeholders();
        let seats = roster.iter().map(Seat::occupied_by).collect();
        let archive = store::load_archive(&store).context("Failed to load saved arrangements")?;

        tracing::info!(saved = archive.len(), "Seating chart initialized");

        let mut controller = Self {
            surface,
            dialogs,
            store,
            roster,
            seats,
            archive,
            rng,
        };
        controller.refresh_views()?;
        Ok(controller)
    }

    // === Accessors ===

    /// Current roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current seats in row-major order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Saved arrangements.
    pub fn archive(&self) -> &ArrangementArchive {
        &self.archive
    }

    /// The presentation surface.
    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// The dialog service.
    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // === Derived views ===

    /// Roster names tagged with whether an occupied seat shows them.
    pub fn roster_entries(&self) -> Vec<RosterEntry> {
        self.roster
            .iter()
            .map(|name| RosterEntry {
                name: name.to_string(),
                assigned: self.is_seated(name),
            })
            .collect()
    }

    /// Occupied / unoccupied totals.
    pub fn counts(&self) -> SeatCounts {
        SeatCounts::of(&self.seats)
    }

    /// Read-only map of `"{row}열 {col}번"` to the seat's current text.
    pub fn seat_map(&self) -> Vec<(String, String)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(index, seat)| (SeatPosition::from_index(index).label(), seat.label.clone()))
            .collect()
    }

    /// Roster names not shown by any occupied seat.
    pub fn available_students(&self) -> Vec<String> {
        self.roster
            .iter()
            .filter(|name| !self.is_seated(name))
            .map(str::to_string)
            .collect()
    }

    fn is_seated(&self, name: &str) -> bool {
        self.seats
            .iter()
            .any(|seat| seat.occupied && seat.label == name)
    }

    fn refresh_views(&mut self) -> Result<()> {
        let entries = self.roster_entries();
        let counts = self.counts();
        self.surface.render_seats(&self.seats)?;
        self.surface.render_roster(&entries)?;
        self.surface.render_counts(counts)?;
        Ok(())
    }

    // === Whole-chart actions ===

    /// Randomly reassigns the whole roster to the seats after confirmation.
    pub fn shuffle(&mut self) -> Result<()> {
        let prompt = ConfirmPrompt::new(
            "Shuffle seats?",
            "The current arrangement will be replaced.",
        )
        .confirm("Shuffle");
        if !self.dialogs.confirm(&prompt)?.is_confirmed() {
            return Ok(());
        }

        let order = shuffled(self.roster.names(), &mut self.rng);
        self.seats = order.into_iter().map(Seat::occupied_by).collect();
        tracing::info!("Seats shuffled");

        self.refresh_views()?;
        self.dialogs.notify(&Notice::success(
            "Done!",
            "Seats have been shuffled.",
        ))
    }

    /// Empties every seat after confirmation.
    pub fn reset(&mut self) -> Result<()> {
        let prompt = ConfirmPrompt::new(
            "Reset all seats?",
            "Every seat assignment will be cleared.",
        )
        .confirm("Reset")
        .warning();
        if !self.dialogs.confirm(&prompt)?.is_confirmed() {
            return Ok(());
        }

        self.seats = (0..SEAT_COUNT).map(Seat::empty).collect();
        tracing::info!("Seats reset");

        self.refresh_views()?;
        self.dialogs.notify(&Notice::success(
            "Reset complete",
            "All seats are now empty.",
        ))
    }

    // === Single seat ===

    /// Handles activation of the seat at `index`.
    pub fn click_seat(&mut self, index: usize) -> Result<()> {
        ensure!(index < self.seats.len(), "Seat index out of range: {index}");

        if self.seats[index].occupied {
            self.manage_occupied_seat(index)
        } else {
            self.assign_empty_seat(index)
        }
    }

    fn assign_empty_seat(&mut self, index: usize) -> Result<()> {
        let prompt = ConfirmPrompt::new(
            "Assign a student",
            format!("How should seat {} be filled?", index + 1),
        )
        .confirm("Type a name")
        .deny("Pick from roster");

        match self.dialogs.confirm(&prompt)? {
            Confirmation::Confirmed => self.type_student_name(index),
            Confirmation::Denied => self.pick_from_roster(index),
            Confirmation::Dismissed => Ok(()),
        }
    }

    fn type_student_name(&mut self, index: usize) -> Result<()> {
        let prompt = TextPrompt::new("Student name", "Enter the student's name")
            .placeholder("e.g. Kim Minjun")
            .confirm("Assign")
            .validator(validate_student_name);

        let Some(value) = self.dialogs.input_text(&prompt)? else {
            return Ok(());
        };
        let name = value.trim().to_string();

        self.seats[index].assign(name.clone());
        tracing::debug!(seat = index, %name, "Seat assigned by name");

        self.refresh_views()?;
        self.dialogs.notify(&Notice::success(
            "Assigned!",
            format!("{name} now sits in seat {}.", index + 1),
        ))
    }

    fn pick_from_roster(&mut self, index: usize) -> Result<()> {
        let available = self.available_students();
        if available.is_empty() {
            return self.dialogs.notify(&Notice::info(
                "No students available",
                "Every roster student already has a seat. Use \"Type a name\" instead.",
            ));
        }

        let options = available
            .into_iter()
            .map(|name| SelectOption::new(name.clone(), name))
            .collect();
        let prompt = SelectPrompt::new("Choose a student", options)
            .placeholder("Students without a seat")
            .confirm("Assign");

        let Some(name) = self.dialogs.select(&prompt)? else {
            return Ok(());
        };

        self.seats[index].assign(name.clone());
        tracing::debug!(seat = index, %name, "Seat assigned from roster");
        self.refresh_views()?;
        self.surface.highlight_seat(index)
    }

    fn manage_occupied_seat(&mut self, index: usize) -> Result<()> {
        let prompt = ConfirmPrompt::new(
            "Manage seat",
            format!("This is {}'s seat.", self.seats[index].label),
        )
        .confirm("Rename")
        .deny("Vacate");

        match self.dialogs.confirm(&prompt)? {
            Confirmation::Confirmed => self.rename_seat(index),
            Confirmation::Denied => {
                self.seats[index].vacate(index);
                tracing::debug!(seat = index, "Seat vacated");
                self.refresh_views()
            }
            Confirmation::Dismissed => Ok(()),
        }
    }

    fn rename_seat(&mut self, index: usize) -> Result<()> {
        let current = self.seats[index].label.clone();
        let prompt = TextPrompt::new("Rename student", "Enter the new name")
            .initial(current.clone())
            .confirm("Rename")
            .validator(validate_student_name);

        let Some(value) = self.dialogs.input_text(&prompt)? else {
            return Ok(());
        };
        let name = value.trim().to_string();
        if name == current {
            return Ok(());
        }

        self.seats[index].label = name.clone();
        tracing::debug!(seat = index, from = %current, to = %name, "Seat renamed");

        self.refresh_views()?;
        self.surface.highlight_seat(index)?;
        self.dialogs.notify(&Notice::success(
            "Renamed!",
            format!("The name is now \"{name}\"."),
        ))
    }

    // === Archive ===

    /// Saves the current labels under a user-chosen name.
    ///
    /// The archive is written to the store before it is updated in memory, so a
    /// failed write leaves the session unchanged.
    pub fn save_arrangement(&mut self) -> Result<()> {
        let prompt = TextPrompt::new("Save arrangement", "Name this arrangement")
            .placeholder("e.g. Math class, Presentations")
            .confirm("Save")
            .validator(validate_arrangement_name);

        let Some(value) = self.dialogs.input_text(&prompt)? else {
            return Ok(());
        };
        let name = value.trim().to_string();

        let arrangement = Arrangement::capture(name.clone(), timestamp(), &self.seats);
        let mut archive = self.archive.clone();
        archive.push(arrangement);
        store::persist_archive(&mut self.store, &archive)
            .context("Failed to save arrangement")?;
        self.archive = archive;

        tracing::info!(%name, saved = self.archive.len(), "Arrangement saved");
        self.dialogs.notify(&Notice::success(
            "Saved!",
            format!("Arrangement \"{name}\" has been saved."),
        ))
    }

    /// Restores a saved arrangement chosen by the user.
    ///
    /// Occupancy is recomputed from the current roster: labels that are not on it
    /// stay visible but count as empty seats.
    pub fn load_arrangement(&mut self) -> Result<()> {
        if self.archive.is_empty() {
            return self.dialogs.notify(&Notice::info(
                "No saved arrangements",
                "Save an arrangement first.",
            ));
        }

        let options = self
            .archive
            .entries()
            .iter()
            .enumerate()
            .map(|(index, arrangement)| SelectOption::new(arrangement.display_label(), index))
            .collect();
        let prompt = SelectPrompt::new("Load arrangement", options)
            .placeholder("Choose an arrangement to load")
            .confirm("Load");

        let Some(index) = self.dialogs.select(&prompt)? else {
            return Ok(());
        };
        let Some(arrangement) = self.archive.get(index).cloned() else {
            anyhow::bail!("Saved arrangement {index} does not exist");
        };

        self.seats = arrangement
            .seats
            .iter()
            .map(|label| Seat {
                occupied: self.roster.contains(label),
                label: label.clone(),
            })
            .collect();
        tracing::info!(name = %arrangement.name, "Arrangement loaded");

        self.refresh_views()?;
        self.dialogs.notify(&Notice::success(
            "Loaded!",
            format!("Arrangement \"{}\" has been restored.", arrangement.name),
        ))
    }

    // === Roster ===

    /// Text the roster editor starts from.
    pub fn initial_roster_text(&self) -> String {
        roster_list::initial_text(&self.seats, &self.roster)
    }

    /// Opens the roster editor until a list is applied or the editor is closed.
    pub fn manage_roster(&mut self) -> Result<()> {
        let current = self.initial_roster_text();
        let mut request = RosterEditRequest {
            text: current.clone(),
            current,
        };

        while let Some(text) = self.surface.edit_roster(&request)? {
            if self.apply_roster_list(&text)? == RosterApplyOutcome::Applied {
                break;
            }
            request.text = text;
        }
        Ok(())
    }

    /// Validates `text` and, after confirmation, replaces the roster.
    ///
    /// Seat assignments are left untouched.
    pub fn apply_roster_list(&mut self, text: &str) -> Result<RosterApplyOutcome> {
        let submission = RosterSubmission::from_text(text);

        if submission.is_empty() {
            self.dialogs.notify(&Notice::warning(
                "No students entered",
                "Enter at least one student name.",
            ))?;
            return Ok(RosterApplyOutcome::Rejected);
        }

        if submission.has_duplicates() {
            let prompt = ConfirmPrompt::new(
                "Duplicate names",
                "Some names appear more than once. Remove the duplicates and continue?",
            )
            .confirm("Continue");
            if !self.dialogs.confirm(&prompt)?.is_confirmed() {
                return Ok(RosterApplyOutcome::Cancelled);
            }
        }

        let count = submission.unique.len();
        let listing = submission
            .unique
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {name}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = ConfirmPrompt::new(
            "Apply roster?",
            format!("{count} students:\n{listing}\n\nThe existing roster will be replaced."),
        )
        .confirm("Apply");
        if !self.dialogs.confirm(&prompt)?.is_confirmed() {
            return Ok(RosterApplyOutcome::Cancelled);
        }

        self.roster = submission.into_roster();
        tracing::info!(students = count, "Roster applied");

        self.refresh_views()?;
        self.dialogs.notify(&Notice::success(
            "Roster applied!",
            format!("{count} students are now on the roster."),
        ))?;
        Ok(RosterApplyOutcome::Applied)
    }

    /// Handles activation of the `index`-th roster entry.
    ///
    /// Assigned students get their seat highlighted; anything else is ignored.
    pub fn click_roster_entry(&mut self, index: usize) -> Result<()> {
        let Some(name) = self.roster.get(index) else {
            return Ok(());
        };
        let seat = self
            .seats
            .iter()
            .position(|seat| seat.occupied && seat.label == name);

        match seat {
            Some(seat) => self.surface.highlight_seat(seat),
            None => Ok(()),
        }
    }

    /// Presents the seat map as an info notice.
    pub fn show_seat_map(&mut self) -> Result<Vec<(String, String)>> {
        let map = self.seat_map();
        tracing::debug!(?map, "Current seat map");

        let text = map
            .iter()
            .map(|(position, label)| format!("{position}: {label}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.dialogs
            .notify(&Notice::info("Current seat map", text))?;
        Ok(map)
    }
}

/// Local timestamp recorded with saved arrangements.
fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
