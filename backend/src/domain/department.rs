//! Per-department accumulator and the map that holds one per department.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::age_range::AgeRange;
use super::user_record::{Gender, UserRecord, name_key};

/// Running statistics for one department.
///
/// Serialises as
/// `{"male": n, "female": n, "ageRange": "min-max", "hair": {..}, "addressUser": {..}}`;
/// `ageRange` is `""` until an age has been recorded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DepartmentAggregate {
    #[serde(rename = "male")]
    male_count: u64,
    #[serde(rename = "female")]
    female_count: u64,
    #[serde(rename = "ageRange", serialize_with = "serialize_age_range")]
    age_range: AgeRange,
    #[serde(rename = "hair")]
    hair_color_counts: BTreeMap<String, u64>,
    #[serde(rename = "addressUser")]
    address_by_name: BTreeMap<String, String>,
}

fn serialize_age_range<S: Serializer>(
    range: &AgeRange,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&range.to_text())
}

impl DepartmentAggregate {
    /// Empty aggregate: zero counts, empty age range, empty maps.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn male_count(&self) -> u64 {
        self.male_count
    }

    pub fn female_count(&self) -> u64 {
        self.female_count
    }

    pub fn age_range(&self) -> AgeRange {
        self.age_range
    }

    /// Occurrences of each hair colour.
    pub fn hair_color_counts(&self) -> &BTreeMap<String, u64> {
        &self.hair_color_counts
    }

    /// Postal code keyed by concatenated first and last name.
    pub fn address_by_name(&self) -> &BTreeMap<String, String> {
        &self.address_by_name
    }

    /// Count one more person of `gender`.
    pub fn record_gender(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male_count += 1,
            Gender::Female => self.female_count += 1,
        }
    }

    /// Widen the age range to include `age`.
    pub fn record_age(&mut self, age: u32) {
        self.age_range = self.age_range.merged_with(age);
    }

    /// Count one more occurrence of `color`.
    pub fn record_hair_color(&mut self, color: &str) {
        *self
            .hair_color_counts
            .entry(color.to_owned())
            .or_insert(0) += 1;
    }

    /// Store `postal_code` under `first_name + last_name`.
    ///
    /// Last write wins: two people sharing a first and last name keep only
    /// the postal code recorded most recently.
    pub fn record_address(&mut self, first_name: &str, last_name: &str, postal_code: &str) {
        self.address_by_name
            .insert(name_key(first_name, last_name), postal_code.to_owned());
    }

    /// Apply every per-record update for `user`.
    pub fn record(&mut self, user: &UserRecord) {
        self.record_gender(user.gender);
        self.record_age(user.age);
        self.record_hair_color(&user.hair_color);
        self.record_address(&user.first_name, &user.last_name, &user.postal_code);
    }
}

/// Department name to aggregate, built fresh for every aggregation run.
///
/// Serialises as a JSON object keyed by department, in name order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AggregateMap(BTreeMap<String, DepartmentAggregate>);

impl AggregateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the aggregate for `department`, inserting an empty one first
    /// when the department has not been seen.
    ///
    /// # Examples
    /// ```
    /// use department_stats::domain::AggregateMap;
    ///
    /// let mut map = AggregateMap::new();
    /// map.ensure("Engineering");
    /// map.ensure("Engineering");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn ensure(&mut self, department: &str) -> &mut DepartmentAggregate {
        self.0.entry(department.to_owned()).or_default()
    }

    pub fn get(&self, department: &str) -> Option<&DepartmentAggregate> {
        self.0.get(department)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
