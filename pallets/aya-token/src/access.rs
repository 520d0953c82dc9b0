//! Role-based access control.
//!
//! Every role is administered by [`ADMIN_ROLE`]. Membership changes are
//! idempotent, and the last admin can never be removed.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Config, Error, Event, Pallet, RoleId, RoleMemberCount, Roles, ADMIN_ROLE};

impl<T: Config> Pallet<T> {
    pub fn has_role(role: &RoleId, account: &T::AccountId) -> bool {
        Roles::<T>::get(role, account)
    }

    /// Fail with [`Error::Unauthorized`] unless `account` holds `role`.
    pub fn ensure_role(role: &RoleId, account: &T::AccountId) -> Result<(), Error<T>> {
        ensure!(Self::has_role(role, account), Error::<T>::Unauthorized);
        Ok(())
    }

    pub fn do_grant_role(
        sender: &T::AccountId,
        role: RoleId,
        account: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_role(&ADMIN_ROLE, sender)?;
        if Self::insert_role(&role, &account) {
            Self::deposit_event(Event::RoleGranted { role, account, sender: sender.clone() });
        }
        Ok(())
    }

    pub fn do_revoke_role(
        sender: &T::AccountId,
        role: RoleId,
        account: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_role(&ADMIN_ROLE, sender)?;
        if Self::remove_role(&role, &account)? {
            Self::deposit_event(Event::RoleRevoked { role, account, sender: sender.clone() });
        }
        Ok(())
    }

    /// Drop a role held by the caller. Needs no admin rights.
    pub fn do_renounce_role(who: T::AccountId, role: RoleId) -> DispatchResult {
        if Self::remove_role(&role, &who)? {
            Self::deposit_event(Event::RoleRevoked { role, account: who.clone(), sender: who });
        }
        Ok(())
    }

    /// Record membership. Returns `false` if `account` already held `role`.
    pub(crate) fn insert_role(role: &RoleId, account: &T::AccountId) -> bool {
        if Self::has_role(role, account) {
            return false;
        }
        Roles::<T>::insert(role, account, true);
        RoleMemberCount::<T>::mutate(role, |count| *count = count.saturating_add(1));
        true
    }

    /// Drop membership. Returns `false` if `account` did not hold `role`.
    fn remove_role(role: &RoleId, account: &T::AccountId) -> Result<bool, Error<T>> {
        if !Self::has_role(role, account) {
            return Ok(false);
        }
        if *role == ADMIN_ROLE {
            ensure!(RoleMemberCount::<T>::get(role) > 1, Error::<T>::LastAdmin);
        }
        Roles::<T>::remove(role, account);
        RoleMemberCount::<T>::mutate(role, |count| *count = count.saturating_sub(1));
        Ok(true)
    }
}
