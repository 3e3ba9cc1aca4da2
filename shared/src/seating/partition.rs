//! Partition of a guest set across the unseated pool and fixed table slots

use std::collections::{HashMap, VecDeque};
use std::marker::PhantomData;

use super::error::{SeatingError, SeatingResult};
use super::table::{ChartLayout, Guest, GuestId, Location, Position, Table, TableState};
use crate::models::GRID_SNAP;

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Source and destination were the same slot
    Unchanged,
}

/// In-memory seating partition for one chart variant
///
/// Every guest appears exactly once across the pool and all tables. Moves
/// either fully apply or return an error with the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T: TableState> {
    layout: ChartLayout,
    /// Indexed by `GuestId`
    guests: Vec<Guest>,
    pool: Vec<GuestId>,
    tables: Vec<Table<T::Extra>>,
    _variant: PhantomData<fn() -> T>,
}

impl<T: TableState> Partition<T> {
    /// Build a partition with the variant's default layout
    pub fn initialize(directory_names: &[String], persisted: Vec<T>) -> Self {
        Self::with_layout(T::layout(), directory_names, persisted)
    }

    /// Build a partition from the directory and the persisted tables
    ///
    /// Persisted tables beyond `table_count` are dropped, missing ones start
    /// empty. Each persisted name claims the first unclaimed directory guest
    /// of that name; a name with nothing left to claim stays seated as an
    /// unlisted guest. Directory guests never claimed form the pool, in
    /// directory order.
    pub fn with_layout(layout: ChartLayout, directory_names: &[String], persisted: Vec<T>) -> Self {
        let mut guests: Vec<Guest> = directory_names
            .iter()
            .enumerate()
            .map(|(i, name)| Guest {
                id: GuestId(i as u32),
                name: name.clone(),
                listed: true,
            })
            .collect();

        let mut unclaimed: HashMap<&str, VecDeque<GuestId>> = HashMap::new();
        for guest in &guests {
            let key = directory_names[guest.id.0 as usize].as_str();
            unclaimed.entry(key).or_default().push_back(guest.id);
        }

        let mut seated = vec![false; directory_names.len()];
        let mut tables = Vec::with_capacity(layout.table_count);
        let mut persisted = persisted.into_iter();

        for number in 1..=layout.table_count {
            let (names, extra) = match persisted.next() {
                Some(state) => state.into_parts(),
                None => (Vec::new(), T::Extra::default()),
            };

            let mut seat_ids = Vec::with_capacity(names.len());
            for name in names {
                let claimed = unclaimed
                    .get_mut(name.as_str())
                    .and_then(|ids| ids.pop_front());
                let id = match claimed {
                    Some(id) => {
                        seated[id.0 as usize] = true;
                        id
                    }
                    None => {
                        let id = GuestId(guests.len() as u32);
                        tracing::debug!(guest = %name, table = number, "Seated guest missing from directory");
                        guests.push(Guest {
                            id,
                            name,
                            listed: false,
                        });
                        id
                    }
                };
                seat_ids.push(id);
            }

            tables.push(Table {
                number,
                role: layout.role_of(number),
                guests: seat_ids,
                extra,
            });
        }

        let pool = seated
            .iter()
            .enumerate()
            .filter(|(_, seated)| !**seated)
            .map(|(i, _)| GuestId(i as u32))
            .collect();

        Self {
            layout,
            guests,
            pool,
            tables,
            _variant: PhantomData,
        }
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Unseated guests
    pub fn pool(&self) -> &[GuestId] {
        &self.pool
    }

    pub fn tables(&self) -> &[Table<T::Extra>] {
        &self.tables
    }

    /// Table by 1-based number
    pub fn table(&self, number: usize) -> Option<&Table<T::Extra>> {
        number.checked_sub(1).and_then(|i| self.tables.get(i))
    }

    /// Every guest the partition knows, in id order
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn guest(&self, id: GuestId) -> Option<&Guest> {
        self.guests.get(id.0 as usize)
    }

    /// Display name for a guest id; empty for ids the partition never issued
    pub fn name(&self, id: GuestId) -> &str {
        self.guest(id).map(|g| g.name.as_str()).unwrap_or_default()
    }

    /// Guest ids at a location
    pub fn guests_at(&self, location: Location) -> SeatingResult<&[GuestId]> {
        match location {
            Location::Pool => Ok(&self.pool),
            Location::Table(number) => self
                .table(number)
                .map(|t| t.guests.as_slice())
                .ok_or(SeatingError::TableNotFound {
                    number,
                    table_count: self.layout.table_count,
                }),
        }
    }

    /// Guest id at `location[index]`
    pub fn guest_at(&self, location: Location, index: usize) -> SeatingResult<GuestId> {
        self.guests_at(location)?
            .get(index)
            .copied()
            .ok_or(SeatingError::IndexOutOfRange { location, index })
    }

    /// Display names at a location
    pub fn names_at(&self, location: Location) -> SeatingResult<Vec<&str>> {
        Ok(self
            .guests_at(location)?
            .iter()
            .map(|id| self.name(*id))
            .collect())
    }

    /// Where a guest currently sits
    pub fn locate(&self, guest: GuestId) -> Option<(Location, usize)> {
        if let Some(i) = self.pool.iter().position(|g| *g == guest) {
            return Some((Location::Pool, i));
        }
        self.tables.iter().find_map(|t| {
            t.guests
                .iter()
                .position(|g| *g == guest)
                .map(|i| (Location::Table(t.number), i))
        })
    }

    /// Pool index that keeps the pool in directory order when `guest` is inserted
    pub fn pool_insert_index(&self, guest: GuestId) -> usize {
        self.pool.partition_point(|g| *g < guest)
    }

    /// Relocate one guest
    ///
    /// `to_index` is the index in the destination after removal from the
    /// source; values past the end append. A move into a table already at
    /// capacity is rejected, including a reorder within that table.
    pub fn move_guest(
        &mut self,
        guest: GuestId,
        from: Location,
        from_index: usize,
        to: Location,
        to_index: usize,
    ) -> SeatingResult<MoveOutcome> {
        self.check_location(from)?;
        self.check_location(to)?;

        if from == to && from_index == to_index {
            return Ok(MoveOutcome::Unchanged);
        }

        let found = self.guest_at(from, from_index)?;
        if found != guest {
            return Err(SeatingError::GuestMismatch {
                guest,
                location: from,
                index: from_index,
            });
        }

        if let (Location::Table(number), Some(capacity)) = (to, self.layout.capacity)
            && self.guests_at(to)?.len() >= capacity
        {
            return Err(SeatingError::TableFull { number, capacity });
        }

        let moved = self.list_mut(from).remove(from_index);
        let destination = self.list_mut(to);
        let at = to_index.min(destination.len());
        destination.insert(at, moved);

        Ok(MoveOutcome::Moved)
    }

    /// Full snapshot in the persisted shape
    pub fn serialize(&self) -> Vec<T> {
        self.tables
            .iter()
            .map(|t| {
                let names = t.guests.iter().map(|id| self.name(*id).to_string()).collect();
                T::from_parts(names, &t.extra)
            })
            .collect()
    }

    /// Every known guest appears exactly once across pool and tables
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![0u32; self.guests.len()];
        let placed = self
            .pool
            .iter()
            .chain(self.tables.iter().flat_map(|t| t.guests.iter()));
        for id in placed {
            match seen.get_mut(id.0 as usize) {
                Some(count) => *count += 1,
                None => return false,
            }
        }
        self.tables.len() == self.layout.table_count && seen.iter().all(|c| *c == 1)
    }

    /// Tables holding more guests than the layout allows
    ///
    /// Only persisted data can produce these; moves never overfill a table.
    pub fn over_capacity(&self) -> Vec<usize> {
        match self.layout.capacity {
            Some(capacity) => self
                .tables
                .iter()
                .filter(|t| t.len() > capacity)
                .map(|t| t.number)
                .collect(),
            None => Vec::new(),
        }
    }

    fn check_location(&self, location: Location) -> SeatingResult<()> {
        match location {
            Location::Table(number) if self.table(number).is_none() => {
                Err(SeatingError::TableNotFound {
                    number,
                    table_count: self.layout.table_count,
                })
            }
            _ => Ok(()),
        }
    }

    /// Caller has already validated `location`
    fn list_mut(&mut self, location: Location) -> &mut Vec<GuestId> {
        match location {
            Location::Pool => &mut self.pool,
            Location::Table(number) => &mut self.tables[number - 1].guests,
        }
    }
}

impl<T: TableState<Extra = Position>> Partition<T> {
    /// Place a table on the canvas, snapped to the 40-unit grid
    ///
    /// No bounds are enforced; tables may sit off the visible canvas.
    pub fn move_table_position(&mut self, number: usize, x: f64, y: f64) -> SeatingResult<Position> {
        self.check_location(Location::Table(number))?;
        let position = Position::snapped(x, y, GRID_SNAP);
        self.tables[number - 1].extra = position;
        Ok(position)
    }
}
