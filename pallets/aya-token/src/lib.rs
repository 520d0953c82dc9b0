//! # AYA Token Pallet
//!
//! A fixed-supply fungible token with role-based administration and an account
//! blacklist. The full supply is minted to the genesis owner, holders move value
//! with single or batched (delegated) transfers, and holders of [`ADMIN_ROLE`]
//! can blacklist accounts and sweep a blacklisted balance into the treasury.
//!
//! The pallet is split the same way the ledger is reasoned about:
//!
//! - `access`: role membership (`grant_role`, `revoke_role`, `renounce_role`)
//! - `blacklist`: the set of accounts barred from sending
//! - `ledger`: balances, allowances and every value-moving operation
//!
//! The dispatchables below only resolve the signed caller and validate the shape
//! of batch arguments before delegating to those modules.
#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` is deprecated upstream; the getters are the token's read API.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

mod access;
mod blacklist;
mod ledger;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::aya-token";

/// Identifier of an access-control role.
pub type RoleId = [u8; 32];

/// Role allowed to manage roles, the blacklist and the treasury.
pub const ADMIN_ROLE: RoleId = [0u8; 32];

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Maximum number of legs accepted by a single batch call.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        /// Whether a batch with zero legs succeeds as a no-op (`true`) or is
        /// rejected with [`Error::EmptyBatch`] (`false`).
        type AllowEmptyBatch: Get<bool>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "AYA")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Fixed at genesis.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending limits, keyed by (owner, spender)
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Role membership, keyed by (role, account)
    #[pallet::storage]
    pub type Roles<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        RoleId,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    /// Number of accounts holding each role
    #[pallet::storage]
    #[pallet::getter(fn role_member_count)]
    pub type RoleMemberCount<T> = StorageMap<_, Blake2_128Concat, RoleId, u32, ValueQuery>;

    /// Blacklisted accounts (cannot be the source of a transfer)
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type BlackList<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Account credited with destroyed black funds
    #[pallet::storage]
    #[pallet::getter(fn treasury)]
    pub type Treasury<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another
        Transfer { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s tokens set to `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// `account` was granted `role` by `sender`
        RoleGranted { role: RoleId, account: T::AccountId, sender: T::AccountId },
        /// `account` lost `role`; `sender` is the account itself on renounce
        RoleRevoked { role: RoleId, account: T::AccountId, sender: T::AccountId },
        /// Account added to the blacklist
        AddedBlackList { account: T::AccountId },
        /// Account removed from the blacklist
        RemovedBlackList { account: T::AccountId },
        /// Balance of a blacklisted account swept into the treasury
        DestroyedBlackFunds { account: T::AccountId, amount: u128, treasury: T::AccountId },
        /// Treasury account changed
        TreasuryChanged { treasury: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the required role.
        Unauthorized,
        /// Source account is blacklisted.
        AccountBlacklisted,
        InsufficientBalance,
        InsufficientAllowance,
        /// Batch argument vectors differ in length.
        ArgumentLengthMismatch,
        /// Target of `destroy_black_funds` is not blacklisted.
        NotBlacklisted,
        /// Batch has no legs and empty batches are disabled.
        EmptyBatch,
        /// Batch has more legs than `MaxBatchSize`.
        BatchTooLarge,
        /// The last admin cannot give up the admin role.
        LastAdmin,
        /// No treasury account is configured.
        NoTreasury,
        /// The treasury itself cannot have its funds destroyed.
        TreasuryBlacklisted,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount);
            Ok(())
        }

        /// Move `amount` from `owner` to `to`, spending the caller's allowance.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_transfer_from(&spender, &owner, &to, amount)
        }

        /// Send `amounts[i]` to `destinations[i]` for every `i`, all or nothing.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_batch(destinations.len() as u32))]
        pub fn transfer_batch(
            origin: OriginFor<T>,
            destinations: Vec<T::AccountId>,
            amounts: Vec<u128>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_batch_shape(&[destinations.len(), amounts.len()])?;
            Self::do_transfer_batch(&sender, &destinations, &amounts)
        }

        /// Delegated counterpart of `transfer_batch`: leg `i` moves `amounts[i]`
        /// from `sources[i]` to `destinations[i]` using the caller's allowance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from_batch(sources.len() as u32))]
        pub fn transfer_from_batch(
            origin: OriginFor<T>,
            sources: Vec<T::AccountId>,
            destinations: Vec<T::AccountId>,
            amounts: Vec<u128>,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_batch_shape(&[sources.len(), destinations.len(), amounts.len()])?;
            Self::do_transfer_from_batch(&spender, &sources, &destinations, &amounts)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::add_black_list())]
        pub fn add_black_list(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_add_black_list(&sender, account)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::remove_black_list())]
        pub fn remove_black_list(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_remove_black_list(&sender, account)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::destroy_black_funds())]
        pub fn destroy_black_funds(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_destroy_black_funds(&sender, account)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: RoleId,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_grant_role(&sender, role, account)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: RoleId,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_revoke_role(&sender, role, account)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: RoleId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_renounce_role(who, role)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_increase_allowance(&owner, &spender, delta)
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_decrease_allowance(&owner, &spender, delta)
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::set_treasury())]
        pub fn set_treasury(origin: OriginFor<T>, treasury: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_set_treasury(&sender, treasury)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Issuer: receives the whole supply, the admin role and the treasury
        pub owner: Option<T::AccountId>,
        /// Supply minted to `owner`
        pub initial_supply: u128,
        /// Additional accounts granted the admin role
        pub admins: Vec<T::AccountId>,
        /// Accounts blacklisted from the start
        pub blacklisted: Vec<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                Pallet::<T>::insert_role(&ADMIN_ROLE, owner);
                Treasury::<T>::put(owner);
                Pallet::<T>::mint(owner, self.initial_supply).expect("Initial supply overflow");
            } else {
                assert!(self.initial_supply == 0, "Initial supply requires an owner");
            }

            for admin in &self.admins {
                Pallet::<T>::insert_role(&ADMIN_ROLE, admin);
            }

            assert!(
                RoleMemberCount::<T>::get(ADMIN_ROLE) > 0,
                "Genesis must assign the admin role to at least one account"
            );

            for account in &self.blacklisted {
                BlackList::<T>::insert(account, true);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Validate the lengths of a batch call's argument vectors.
    ///
    /// All vectors must agree in length; an empty batch is accepted only when
    /// `AllowEmptyBatch` is set; batches above `MaxBatchSize` are rejected.
    pub fn ensure_batch_shape(lengths: &[usize]) -> Result<(), Error<T>> {
        let len = lengths.first().copied().unwrap_or_default();
        ensure!(lengths.iter().all(|l| *l == len), Error::<T>::ArgumentLengthMismatch);
        ensure!(len > 0 || T::AllowEmptyBatch::get(), Error::<T>::EmptyBatch);
        ensure!(len <= T::MaxBatchSize::get() as usize, Error::<T>::BatchTooLarge);
        Ok(())
    }

    /// Check the ledger and role invariants.
    ///
    /// - the balances add up to the total supply
    /// - at least one account holds the admin role, and the member count
    ///   matches the stored memberships
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("Sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "Sum of balances differs from total supply");

        let admins = Roles::<T>::iter_prefix_values(ADMIN_ROLE).filter(|held| *held).count();
        ensure!(admins > 0, "No account holds the admin role");
        ensure!(
            admins as u32 == RoleMemberCount::<T>::get(ADMIN_ROLE),
            "Admin member count out of sync"
        );
        Ok(())
    }
}
