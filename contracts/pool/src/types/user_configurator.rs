use pool_interface::types::error::Error;
use pool_interface::types::user_config::UserConfiguration;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_user_config, write_user_config};

/// Lazily loaded user configuration which is written back only when a flag changed
pub struct UserConfigurator<'a> {
    env: &'a Env,
    user: &'a Address,
    should_write: bool,
    user_config: Option<UserConfiguration>,
}

impl<'a> UserConfigurator<'a> {
    pub fn new(env: &'a Env, user: &'a Address) -> Self {
        Self {
            env,
            user,
            should_write: false,
            user_config: None,
        }
    }

    pub fn set_collateral(
        &mut self,
        reserve_id: u8,
        asset: &Address,
        use_as_collateral: bool,
    ) -> Result<&mut Self, Error> {
        let env = self.env;
        let user = self.user;
        let user_config = self.user_config_mut()?;

        if user_config.is_using_as_collateral(env, reserve_id) == use_as_collateral {
            return Ok(self);
        }

        user_config.set_using_as_collateral(env, reserve_id, use_as_collateral);

        if use_as_collateral {
            event::reserve_used_as_collateral_enabled(env, user, asset);
        } else {
            event::reserve_used_as_collateral_disabled(env, user, asset);
        }

        self.should_write = true;

        Ok(self)
    }

    pub fn set_borrowing(
        &mut self,
        reserve_id: u8,
        asset: &Address,
        borrowing: bool,
    ) -> Result<&mut Self, Error> {
        let env = self.env;
        let user = self.user;
        let user_config = self.user_config_mut()?;

        if user_config.is_borrowing(env, reserve_id) == borrowing {
            return Ok(self);
        }

        user_config.set_borrowing(env, reserve_id, borrowing);

        if borrowing {
            event::borrowing_enabled(env, user, asset);
        } else {
            event::borrowing_disabled(env, user, asset);
        }

        self.should_write = true;

        Ok(self)
    }

    pub fn write(&mut self) {
        if !self.should_write {
            return;
        }

        if let Some(user_config) = self.user_config.as_ref() {
            write_user_config(self.env, self.user, user_config);
        }
    }

    fn user_config_mut(&mut self) -> Result<&mut UserConfiguration, Error> {
        if self.user_config.is_none() {
            self.user_config = Some(read_user_config(self.env, self.user).unwrap_or_default());
        }

        self.user_config.as_mut().ok_or(Error::UserConfigNotExists)
    }
}
