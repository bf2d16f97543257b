use anchor_lang::prelude::*;

use crate::constants::MAX_VESTING_RECORDS;
use crate::error::VestingError;
use crate::utils::{math, time};

/// One promise of tokens to one beneficiary. Only `withdrawn_amount` changes.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingRecord {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    /// Released in full at `start_timestamp`.
    pub start_amount: u64,
    /// Unix seconds (UTC).
    pub start_timestamp: i64,
    /// Count of 30-day epochs over which the remainder vests.
    pub duration_months: u32,
    pub withdrawn_amount: u64,
}

impl VestingRecord {
    pub const SIZE: usize = 32 + 8 + 8 + 8 + 4 + 8;

    pub fn vested_amount(&self, now_ts: i64) -> std::result::Result<u64, VestingError> {
        math::vested_amount(
            self.total_amount,
            self.start_amount,
            self.start_timestamp,
            self.duration_months,
            now_ts,
        )
    }

    /// Vested but not yet withdrawn.
    pub fn available_amount(&self, now_ts: i64) -> std::result::Result<u64, VestingError> {
        self.vested_amount(now_ts)?
            .checked_sub(self.withdrawn_amount)
            .ok_or(VestingError::MathOverflow)
    }

    /// Instant from which the whole `total_amount` is vested.
    pub fn end_timestamp(&self) -> std::result::Result<i64, VestingError> {
        time::epoch_boundary(self.start_timestamp, self.duration_months)
    }
}

/// Record ids owned by one beneficiary, in creation order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BeneficiaryIndex {
    pub beneficiary: Pubkey,
    pub record_ids: Vec<u32>,
}

/// PDA holding every vesting record (append-only) and the beneficiary index.
#[account]
#[derive(Default)]
pub struct VestingBook {
    /// Global record id = position in this list.
    pub records: Vec<VestingRecord>,
    pub beneficiaries: Vec<BeneficiaryIndex>,
}

impl VestingBook {
    /// Account size for `records` entries: discriminator + both vec headers
    /// + worst case of one beneficiary per record.
    pub const fn space_for(records: usize) -> usize {
        8 + 4 + records * VestingRecord::SIZE + 4 + records * (32 + 4 + 4)
    }

    pub fn ids_of(&self, beneficiary: &Pubkey) -> &[u32] {
        self.beneficiaries
            .iter()
            .find(|b| b.beneficiary == *beneficiary)
            .map(|b| b.record_ids.as_slice())
            .unwrap_or(&[])
    }

    /// Records owned by `beneficiary` paired with their global ids.
    pub fn records_of<'a>(
        &'a self,
        beneficiary: &Pubkey,
    ) -> impl Iterator<Item = (u32, &'a VestingRecord)> + 'a {
        self.ids_of(beneficiary)
            .iter()
            .filter_map(move |&id| self.records.get(id as usize).map(|r| (id, r)))
    }

    /// The id the next vesting for `beneficiary` will receive.
    pub fn next_vesting_id(&self, beneficiary: &Pubkey) -> u32 {
        self.ids_of(beneficiary).len() as u32
    }

    /// `vesting_id` is local to the beneficiary (0 = their first record).
    pub fn record_of(&self, beneficiary: &Pubkey, vesting_id: u32) -> Option<&VestingRecord> {
        let id = *self.ids_of(beneficiary).get(vesting_id as usize)?;
        self.records
            .get(id as usize)
            .filter(|r| r.beneficiary == *beneficiary)
    }

    pub fn available_amount(
        &self,
        beneficiary: &Pubkey,
        vesting_id: u32,
        now_ts: i64,
    ) -> std::result::Result<u64, VestingError> {
        match self.record_of(beneficiary, vesting_id) {
            Some(r) => r.available_amount(now_ts),
            None => Ok(0),
        }
    }

    pub fn available_amount_aggregated(
        &self,
        beneficiary: &Pubkey,
        now_ts: i64,
    ) -> std::result::Result<u64, VestingError> {
        let mut sum: u64 = 0;
        for (_, r) in self.records_of(beneficiary) {
            sum = sum
                .checked_add(r.available_amount(now_ts)?)
                .ok_or(VestingError::MathOverflow)?;
        }
        Ok(sum)
    }

    /// Append a record, returning the beneficiary-local vesting id.
    pub fn push(&mut self, record: VestingRecord) -> std::result::Result<u32, VestingError> {
        if self.records.len() >= MAX_VESTING_RECORDS {
            return Err(VestingError::VestingBookFull);
        }
        let id = u32::try_from(self.records.len()).map_err(|_| VestingError::MathOverflow)?;
        self.records.push(record);

        match self
            .beneficiaries
            .iter_mut()
            .find(|b| b.beneficiary == record.beneficiary)
        {
            Some(entry) => {
                entry.record_ids.push(id);
                Ok(entry.record_ids.len() as u32 - 1)
            }
            None => {
                self.beneficiaries.push(BeneficiaryIndex {
                    beneficiary: record.beneficiary,
                    record_ids: vec![id],
                });
                Ok(0)
            }
        }
    }

    /// Records in creation order, starting at `offset`. Empty past the end.
    pub fn page(&self, offset: u32, limit: u32) -> Vec<VestingRecord> {
        self.records
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_EPOCH;

    const START: i64 = 1_767_225_600;

    fn record(beneficiary: Pubkey, total_amount: u64) -> VestingRecord {
        VestingRecord {
            beneficiary,
            total_amount,
            start_amount: 0,
            start_timestamp: START,
            duration_months: 4,
            withdrawn_amount: 0,
        }
    }

    #[test]
    fn push_assigns_local_ids_per_beneficiary() {
        let (u1, u2) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut book = VestingBook::default();

        assert_eq!(book.push(record(u1, 10)).unwrap(), 0);
        assert_eq!(book.push(record(u2, 20)).unwrap(), 0);
        assert_eq!(book.push(record(u1, 30)).unwrap(), 1);

        assert_eq!(book.ids_of(&u1), &[0, 2]);
        assert_eq!(book.ids_of(&u2), &[1]);
        assert_eq!(book.next_vesting_id(&u1), 2);
        assert_eq!(book.next_vesting_id(&Pubkey::new_unique()), 0);
        assert_eq!(book.record_of(&u1, 1).unwrap().total_amount, 30);
        assert!(book.record_of(&u2, 1).is_none());
    }

    #[test]
    fn absent_records_read_as_zero() {
        let u1 = Pubkey::new_unique();
        let mut book = VestingBook::default();
        book.push(record(u1, 10)).unwrap();

        let stranger = Pubkey::new_unique();
        let later = START + 10 * SECONDS_PER_EPOCH;
        assert_eq!(book.available_amount(&stranger, 0, later).unwrap(), 0);
        assert_eq!(book.available_amount(&u1, 7, later).unwrap(), 0);
        assert_eq!(book.available_amount_aggregated(&stranger, later).unwrap(), 0);
        assert_eq!(book.available_amount(&u1, 0, later).unwrap(), 10);
    }

    #[test]
    fn capacity_is_enforced() {
        let u1 = Pubkey::new_unique();
        let mut book = VestingBook::default();
        for _ in 0..MAX_VESTING_RECORDS {
            book.push(record(u1, 1)).unwrap();
        }
        assert!(matches!(
            book.push(record(u1, 1)),
            Err(VestingError::VestingBookFull)
        ));
        assert_eq!(book.records.len(), MAX_VESTING_RECORDS);
    }

    #[test]
    fn page_walks_creation_order() {
        let u1 = Pubkey::new_unique();
        let mut book = VestingBook::default();
        for amount in 1..=5 {
            book.push(record(u1, amount)).unwrap();
        }
        let amounts = |p: Vec<VestingRecord>| p.iter().map(|r| r.total_amount).collect::<Vec<_>>();
        assert_eq!(amounts(book.page(0, 2)), vec![1, 2]);
        assert_eq!(amounts(book.page(4, 2)), vec![5]);
        assert!(book.page(9, 2).is_empty());
    }

    fn serialized_len(book: &VestingBook) -> usize {
        let mut buf = Vec::new();
        AnchorSerialize::serialize(book, &mut buf).unwrap();
        buf.len()
    }

    #[test]
    fn space_covers_serialized_book() {
        let mut book = VestingBook::default();
        assert_eq!(serialized_len(&book) + 8, VestingBook::space_for(0));

        // Worst case: every record has its own beneficiary.
        for _ in 0..MAX_VESTING_RECORDS {
            book.push(record(Pubkey::new_unique(), 1)).unwrap();
            let n = book.records.len();
            assert!(serialized_len(&book) + 8 <= VestingBook::space_for(n));
        }

        // Shared beneficiary packs tighter than the bound.
        let u1 = Pubkey::new_unique();
        let mut shared = VestingBook::default();
        for _ in 0..10 {
            shared.push(record(u1, 1)).unwrap();
        }
        assert!(serialized_len(&shared) + 8 <= VestingBook::space_for(10));
    }

    #[test]
    fn growth_per_record_fits_one_realloc() {
        let step = VestingBook::space_for(1) - VestingBook::space_for(0);
        assert_eq!(step, VestingRecord::SIZE + 40);
        assert!(step <= 10_240);
    }

    #[test]
    fn end_timestamp_covers_duration() {
        let r = record(Pubkey::new_unique(), 10);
        assert_eq!(r.end_timestamp().unwrap(), START + 4 * SECONDS_PER_EPOCH);
    }
}
