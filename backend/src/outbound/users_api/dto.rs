//! DTOs for decoding users API JSON pages.
//!
//! Upstream users are deeply nested documents; the DTOs keep only the fields
//! the aggregation reads and map them into domain records in one pass.

use pagination::Page;
use serde::Deserialize;
use tracing::warn;

use crate::domain::ports::UserPage;
use crate::domain::{Gender, UserRecord};

#[derive(Debug, Deserialize)]
pub(super) struct UsersPageDto {
    #[serde(default)]
    pub(super) users: Vec<UserDto>,
    pub(super) total: u64,
    #[serde(default)]
    pub(super) skip: u64,
    #[serde(default)]
    pub(super) limit: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserDto {
    pub(super) id: Option<i64>,
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) age: u32,
    pub(super) gender: String,
    pub(super) hair: HairDto,
    pub(super) address: AddressDto,
    pub(super) company: CompanyDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct HairDto {
    pub(super) color: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AddressDto {
    pub(super) postal_code: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompanyDto {
    pub(super) department: String,
}

impl UsersPageDto {
    /// Map into a domain page, skipping users whose gender is neither male
    /// nor female. Skipped users still advance the offset.
    pub(super) fn into_domain_page(self) -> UserPage {
        let mut dropped = 0_u64;
        let users: Vec<UserRecord> = self
            .users
            .into_iter()
            .filter_map(|user| match user.into_domain_record() {
                Ok(record) => Some(record),
                Err(reason) => {
                    warn!(%reason, skip = self.skip, "skipping upstream user");
                    dropped += 1;
                    None
                }
            })
            .collect();
        Page::new(users, self.total, self.skip, self.limit).with_dropped(dropped)
    }
}

impl UserDto {
    fn into_domain_record(self) -> Result<UserRecord, String> {
        let gender = self.gender.parse::<Gender>().map_err(|error| match self.id {
            Some(id) => format!("user {id}: {error}"),
            None => format!("user {} {}: {error}", self.first_name, self.last_name),
        })?;

        Ok(UserRecord {
            department: self.company.department,
            gender,
            age: self.age,
            hair_color: self.hair.color,
            first_name: self.first_name,
            last_name: self.last_name,
            postal_code: self.address.postal_code,
        })
    }
}
