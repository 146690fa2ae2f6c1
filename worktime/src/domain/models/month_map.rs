use time::Month;

/// Calendar months in January→December order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

fn index(month: Month) -> usize {
    usize::from(u8::from(month)) - 1
}

/// A month-keyed association backed by a fixed array.
///
/// Iteration always follows calendar order. Entries may be missing; use
/// [`MonthMap::full`] or [`MonthMap::fill_missing`] to materialize all twelve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMap<T> {
    slots: [Option<T>; 12],
}

impl<T> Default for MonthMap<T> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl<T> MonthMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map with a value for every month.
    pub fn full(mut value_for: impl FnMut(Month) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|i| Some(value_for(MONTHS[i]))),
        }
    }

    pub fn insert(&mut self, month: Month, value: T) -> Option<T> {
        self.slots[index(month)].replace(value)
    }

    pub fn remove(&mut self, month: Month) -> Option<T> {
        self.slots[index(month)].take()
    }

    pub fn get(&self, month: Month) -> Option<&T> {
        self.slots[index(month)].as_ref()
    }

    pub fn get_or_insert_with(&mut self, month: Month, value: impl FnOnce() -> T) -> &mut T {
        self.slots[index(month)].get_or_insert_with(value)
    }

    pub fn contains(&self, month: Month) -> bool {
        self.slots[index(month)].is_some()
    }

    pub fn fill_missing(&mut self, mut value_for: impl FnMut(Month) -> T) {
        for (slot, month) in self.slots.iter_mut().zip(MONTHS) {
            if slot.is_none() {
                *slot = Some(value_for(month));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.iter().map(|(month, _)| month)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, &T)> {
        MONTHS
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(month, slot)| slot.as_ref().map(|value| (month, value)))
    }
}

impl<T: Copy + Default> MonthMap<T> {
    /// The value for `month`, or `T::default()` when absent.
    pub fn get_or_default(&self, month: Month) -> T {
        self.get(month).copied().unwrap_or_default()
    }
}

impl<T> FromIterator<(Month, T)> for MonthMap<T> {
    fn from_iter<I: IntoIterator<Item = (Month, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (month, value) in iter {
            map.insert(month, value);
        }
        map
    }
}

impl<T> IntoIterator for MonthMap<T> {
    type Item = (Month, T);
    type IntoIter = std::iter::FilterMap<
        std::iter::Zip<std::array::IntoIter<Month, 12>, std::array::IntoIter<Option<T>, 12>>,
        fn((Month, Option<T>)) -> Option<(Month, T)>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn present<T>((month, slot): (Month, Option<T>)) -> Option<(Month, T)> {
            slot.map(|value| (month, value))
        }

        MONTHS
            .into_iter()
            .zip(self.slots)
            .filter_map(present::<T> as fn((Month, Option<T>)) -> Option<(Month, T)>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_calendar_order_regardless_of_insertion() {
        let mut map = MonthMap::new();
        map.insert(Month::December, 12);
        map.insert(Month::March, 3);
        map.insert(Month::January, 1);

        let months: Vec<_> = map.months().collect();
        assert_eq!(months, vec![Month::January, Month::March, Month::December]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn fill_missing_keeps_existing_values() {
        let mut map: MonthMap<u32> = [(Month::June, 6)].into_iter().collect();
        map.fill_missing(|_| 0);

        assert_eq!(map.len(), 12);
        assert_eq!(map.get(Month::June), Some(&6));
        assert_eq!(map.get(Month::July), Some(&0));
    }

    #[test]
    fn get_or_default_for_absent_month() {
        let map: MonthMap<u32> = MonthMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get_or_default(Month::April), 0);
    }

    #[test]
    fn owned_iteration_yields_present_entries() {
        let map = MonthMap::full(u8::from);
        let collected: Vec<_> = map.into_iter().map(|(_, v)| v).collect();
        assert_eq!(collected, (1..=12).collect::<Vec<u8>>());
    }
}
