//! Balances, allowances and value movement.
//!
//! Single-leg operations validate everything before the first write, so a
//! failure leaves storage untouched. Batches run inside a nested storage layer
//! that is discarded as soon as one leg fails.

use frame_support::{dispatch::DispatchResult, ensure, storage::with_storage_layer};

use crate::{
    Allowances, Balances, Config, Error, Event, Pallet, TotalSupply, Treasury, ADMIN_ROLE,
    LOG_TARGET,
};

impl<T: Config> Pallet<T> {
    /// Credit `amount` to `to` and grow the supply. Only used by genesis.
    pub(crate) fn mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);
        Ok(())
    }

    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_blacklisted(from), Error::<T>::AccountBlacklisted);
        Self::move_balance(from, to, amount)?;
        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Overwrite the allowance of `spender` over `owner`'s balance.
    pub fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        Allowances::<T>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            amount,
        });
    }

    pub fn do_increase_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        delta: u128,
    ) -> DispatchResult {
        let amount = Self::allowance(owner, spender)
            .checked_add(delta)
            .ok_or(Error::<T>::Overflow)?;
        Self::do_approve(owner, spender, amount);
        Ok(())
    }

    pub fn do_decrease_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        delta: u128,
    ) -> DispatchResult {
        let amount = Self::allowance(owner, spender)
            .checked_sub(delta)
            .ok_or(Error::<T>::InsufficientAllowance)?;
        Self::do_approve(owner, spender, amount);
        Ok(())
    }

    /// Move `amount` from `owner` to `to` on behalf of `spender`, consuming
    /// exactly `amount` of the allowance.
    pub fn do_transfer_from(
        spender: &T::AccountId,
        owner: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(!Self::is_blacklisted(owner), Error::<T>::AccountBlacklisted);
        let remaining = Self::allowance(owner, spender)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientAllowance)?;
        Self::move_balance(owner, to, amount)?;
        Allowances::<T>::insert(owner, spender, remaining);
        Self::deposit_event(Event::Transfer { from: owner.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Apply `transfer(caller, destinations[i], amounts[i])` in order.
    ///
    /// Each leg sees the balances left by the previous ones. Either every leg
    /// is committed or none is.
    pub fn do_transfer_batch(
        caller: &T::AccountId,
        destinations: &[T::AccountId],
        amounts: &[u128],
    ) -> DispatchResult {
        ensure!(destinations.len() == amounts.len(), Error::<T>::ArgumentLengthMismatch);
        ensure!(!Self::is_blacklisted(caller), Error::<T>::AccountBlacklisted);

        with_storage_layer(|| {
            destinations.iter().zip(amounts).enumerate().try_for_each(|(leg, (to, amount))| {
                Self::do_transfer(caller, to, *amount).inspect_err(|e| {
                    log::debug!(target: LOG_TARGET, "transfer_batch leg {leg} rejected: {e:?}");
                })
            })
        })
    }

    /// Apply `transfer_from(caller, sources[i], destinations[i], amounts[i])`
    /// in order, all or nothing.
    pub fn do_transfer_from_batch(
        caller: &T::AccountId,
        sources: &[T::AccountId],
        destinations: &[T::AccountId],
        amounts: &[u128],
    ) -> DispatchResult {
        ensure!(
            sources.len() == destinations.len() && destinations.len() == amounts.len(),
            Error::<T>::ArgumentLengthMismatch
        );

        with_storage_layer(|| {
            sources.iter().zip(destinations).zip(amounts).enumerate().try_for_each(
                |(leg, ((owner, to), amount))| {
                    Self::do_transfer_from(caller, owner, to, *amount).inspect_err(|e| {
                        log::debug!(
                            target: LOG_TARGET,
                            "transfer_from_batch leg {leg} rejected: {e:?}"
                        );
                    })
                },
            )
        })
    }

    /// Zero the balance of a blacklisted `account` and credit it to the
    /// treasury. Total supply is unchanged.
    pub fn do_destroy_black_funds(sender: &T::AccountId, account: T::AccountId) -> DispatchResult {
        Self::ensure_role(&ADMIN_ROLE, sender)?;
        ensure!(Self::is_blacklisted(&account), Error::<T>::NotBlacklisted);
        let treasury = Treasury::<T>::get().ok_or(Error::<T>::NoTreasury)?;
        ensure!(treasury != account, Error::<T>::TreasuryBlacklisted);

        let amount = Balances::<T>::get(&account);
        Self::move_balance(&account, &treasury, amount)?;

        log::info!(
            target: LOG_TARGET,
            "destroyed {amount} black funds of {account:?} into treasury {treasury:?}"
        );
        Self::deposit_event(Event::DestroyedBlackFunds { account, amount, treasury });
        Ok(())
    }

    pub fn do_set_treasury(sender: &T::AccountId, treasury: T::AccountId) -> DispatchResult {
        Self::ensure_role(&ADMIN_ROLE, sender)?;
        Treasury::<T>::put(&treasury);
        log::info!(target: LOG_TARGET, "treasury set to {treasury:?}");
        Self::deposit_event(Event::TreasuryChanged { treasury });
        Ok(())
    }

    /// Debit `from` and credit `to`, writing both or neither.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> Result<(), Error<T>> {
        let from_balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Balances::<T>::insert(from, from_balance);
        Balances::<T>::insert(to, to_balance);
        Ok(())
    }
}
