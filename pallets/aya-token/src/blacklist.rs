//! Blacklist registry.
//!
//! A blacklisted account cannot be the source of any transfer but can still
//! receive funds.

use frame_support::dispatch::DispatchResult;

use crate::{BlackList, Config, Event, Pallet, ADMIN_ROLE};

impl<T: Config> Pallet<T> {
    pub fn get_black_list_status(account: &T::AccountId) -> bool {
        BlackList::<T>::get(account)
    }

    pub fn do_add_black_list(sender: &T::AccountId, account: T::AccountId) -> DispatchResult {
        Self::ensure_role(&ADMIN_ROLE, sender)?;
        BlackList::<T>::insert(&account, true);
        Self::deposit_event(Event::AddedBlackList { account });
        Ok(())
    }

    pub fn do_remove_black_list(sender: &T::AccountId, account: T::AccountId) -> DispatchResult {
        Self::ensure_role(&ADMIN_ROLE, sender)?;
        BlackList::<T>::remove(&account);
        Self::deposit_event(Event::RemovedBlackList { account });
        Ok(())
    }
}
