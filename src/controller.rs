// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! Navigation between the sign-in screen, dashboards, live streams and the
//! cart, plus the persisted session record that survives restarts.
//!
//! Every transition is synchronous and total. A transition that the current
//! user or screen does not allow comes back as [`Transition::Ignored`] and
//! leaves the controller untouched. Only store I/O produces errors.

use chrono::Utc;
use log::{debug, info, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    cart::Cart,
    catalog,
    error::{self, Error, Rejection, Result},
    live::{Listing, LiveSession, Product},
    session::{self, Role, UserIdentity},
    storage::Store,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) enum NavState {
    Unauthenticated,
    Dashboard,
    LiveView,
    CartView,
}

#[derive(Debug)]
enum Screen {
    Dashboard,
    Live(LiveSession),
    Cart,
}

#[derive(Debug)]
enum State {
    Unauthenticated,
    SignedIn { user: UserIdentity, screen: Screen },
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    Applied,
    Ignored(Rejection),
}

impl Transition {
    #[cfg(test)]
    pub(crate) const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl From<Result<(), Rejection>> for Transition {
    fn from(value: Result<(), Rejection>) -> Self {
        match value {
            Ok(()) => Self::Applied,
            Err(rejection) => Self::Ignored(rejection),
        }
    }
}

/// Outcome of looking for a session left behind by an earlier run.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Restore {
    Restored,
    Absent,
    /// A record exists but is not one we could have written. It is treated
    /// like no record at all.
    Corrupt,
    Ignored(Rejection),
}

/// Everything the presentation layer needs to draw the current screen.
#[derive(Debug, Serialize)]
pub(crate) struct View<'controller> {
    pub(crate) nav_state: NavState,
    pub(crate) user: Option<&'controller UserIdentity>,
    pub(crate) active_stream_id: Option<&'controller str>,
    pub(crate) live: Option<&'controller LiveSession>,
    pub(crate) cart: &'controller Cart,
}

pub(crate) struct Controller<S> {
    store: S,
    state: State,
    cart: Cart,
}

fn require_role(user: &UserIdentity, required: Role) -> Result<(), Rejection> {
    if user.role() == required {
        Ok(())
    } else {
        Err(Rejection::WrongRole {
            required,
            actual: user.role(),
        })
    }
}

fn apply<F>(state: &mut State, f: F) -> Transition
where
    F: FnOnce(&UserIdentity, &mut Screen) -> Result<(), Rejection>,
{
    let result = match *state {
        State::Unauthenticated => Err(Rejection::NotAuthenticated),
        State::SignedIn {
            ref user,
            ref mut screen,
        } => f(user, screen),
    };
    if let Err(rejection) = result {
        debug!("Ignoring transition: {}", rejection);
    }
    result.into()
}

impl<S: Store> Controller<S> {
    pub(crate) fn new(store: S) -> Self {
        Self {
            store,
            state: State::Unauthenticated,
            cart: Cart::default(),
        }
    }

    pub(crate) const fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn into_store(self) -> S {
        self.store
    }

    pub(crate) const fn nav_state(&self) -> NavState {
        match self.state {
            State::Unauthenticated => NavState::Unauthenticated,
            State::SignedIn { ref screen, .. } => match *screen {
                Screen::Dashboard => NavState::Dashboard,
                Screen::Live(_) => NavState::LiveView,
                Screen::Cart => NavState::CartView,
            },
        }
    }

    pub(crate) const fn current_user(&self) -> Option<&UserIdentity> {
        match self.state {
            State::Unauthenticated => None,
            State::SignedIn { ref user, .. } => Some(user),
        }
    }

    fn live(&self) -> Option<&LiveSession> {
        match self.state {
            State::SignedIn {
                screen: Screen::Live(ref live),
                ..
            } => Some(live),
            State::Unauthenticated | State::SignedIn { .. } => None,
        }
    }

    pub(crate) fn active_stream_id(&self) -> Option<&str> {
        self.live().map(LiveSession::stream_id)
    }

    #[cfg(test)]
    pub(crate) const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub(crate) fn view(&self) -> View<'_> {
        View {
            nav_state: self.nav_state(),
            user: self.current_user(),
            active_stream_id: self.active_stream_id(),
            live: self.live(),
            cart: &self.cart,
        }
    }

    /// Picks up the session a previous run left in the store.
    pub(crate) fn restore_session(&mut self) -> Result<Restore> {
        if let State::SignedIn { .. } = self.state {
            return Ok(Restore::Ignored(Rejection::AlreadyAuthenticated));
        }

        let user = match self.store.get(session::KEY) {
            Ok(None) => return Ok(Restore::Absent),
            Ok(Some(raw)) => UserIdentity::from_record(&raw),
            Err(Error::Storage(error::Storage::NotText(_))) => None,
            Err(e) => return Err(e),
        };
        match user {
            Some(user) => {
                info!("Restored session for {}", user.identifier());
                self.state = State::SignedIn {
                    user,
                    screen: Screen::Dashboard,
                };
                Ok(Restore::Restored)
            }
            None => {
                warn!("The saved session is unreadable, so you need to sign in again");
                Ok(Restore::Corrupt)
            }
        }
    }

    /// Signs in. Registration and `login --as` pass the chosen role; a plain
    /// sign-in passes `None` and gets viewer.
    pub(crate) fn authenticate(&mut self, identifier: &str, role: Option<Role>) -> Result<Transition> {
        if let State::SignedIn { .. } = self.state {
            debug!("Ignoring sign-in for {}: already signed in", identifier);
            return Ok(Transition::Ignored(Rejection::AlreadyAuthenticated));
        }

        let role = match role {
            Some(role) => role,
            None => {
                info!("No role given for {}, so signing in as a viewer", identifier);
                Role::Viewer
            }
        };

        let user = UserIdentity::new(identifier, role);
        self.store.set(session::KEY, &user.to_record()?)?;
        info!("Signed in as {} ({})", user.identifier(), user.role());

        self.state = State::SignedIn {
            user,
            screen: Screen::Dashboard,
        };
        Ok(Transition::Applied)
    }

    /// Always leaves the controller signed out, even when the saved session
    /// could not be removed.
    pub(crate) fn logout(&mut self) -> Result<()> {
        if let State::SignedIn { ref user, .. } = self.state {
            info!("Signing out {}", user.identifier());
        }
        self.state = State::Unauthenticated;
        self.cart.clear();
        self.store.delete(session::KEY)
    }

    pub(crate) fn go_live(&mut self) -> Transition {
        apply(&mut self.state, |user, screen| {
            require_role(user, Role::Seller)?;
            let Screen::Dashboard = *screen else {
                return Err(Rejection::WrongScreen);
            };

            let stream_id = format!("stream-{}", Uuid::new_v4());
            info!("Going live on {}", stream_id);
            *screen = Screen::Live(LiveSession::new(
                stream_id,
                user.display_name().to_owned(),
                Listing::default(),
            ));
            Ok(())
        })
    }

    pub(crate) fn watch_stream(&mut self, stream_id: &str) -> Transition {
        apply(&mut self.state, |user, screen| {
            require_role(user, Role::Viewer)?;
            let Screen::Dashboard = *screen else {
                return Err(Rejection::WrongScreen);
            };

            let live = match catalog::find(stream_id) {
                Some(stream) => LiveSession::new(
                    stream_id.to_owned(),
                    stream.seller_name.to_owned(),
                    stream.listing(),
                ),
                None => {
                    debug!("Stream {} is not in the catalog", stream_id);
                    LiveSession::new(stream_id.to_owned(), stream_id.to_owned(), Listing::default())
                }
            };
            *screen = Screen::Live(live);
            Ok(())
        })
    }

    pub(crate) fn return_to_dashboard(&mut self) -> Transition {
        apply(&mut self.state, |_, screen| match *screen {
            Screen::Live(_) | Screen::Cart => {
                *screen = Screen::Dashboard;
                Ok(())
            }
            Screen::Dashboard => Err(Rejection::WrongScreen),
        })
    }

    pub(crate) fn view_cart(&mut self) -> Transition {
        apply(&mut self.state, |user, screen| {
            require_role(user, Role::Viewer)?;
            match *screen {
                Screen::Dashboard | Screen::Live(_) => {
                    *screen = Screen::Cart;
                    Ok(())
                }
                Screen::Cart => Err(Rejection::WrongScreen),
            }
        })
    }

    pub(crate) fn add_product(&mut self, product: Product) -> Transition {
        apply(&mut self.state, |user, screen| {
            require_role(user, Role::Seller)?;
            let Screen::Live(ref mut live) = *screen else {
                return Err(Rejection::WrongScreen);
            };
            live.listing_mut().add(product);
            Ok(())
        })
    }

    pub(crate) fn feature_product(&mut self, index: usize) -> Transition {
        apply(&mut self.state, |user, screen| {
            require_role(user, Role::Seller)?;
            let Screen::Live(ref mut live) = *screen else {
                return Err(Rejection::WrongScreen);
            };
            if live.listing_mut().feature(index) {
                Ok(())
            } else {
                Err(Rejection::NoSuchItem(index))
            }
        })
    }

    /// Puts the featured product of the stream on screen into the cart.
    pub(crate) fn capture_product(&mut self) -> Transition {
        let cart = &mut self.cart;
        apply(&mut self.state, |user, screen| {
            require_role(user, Role::Viewer)?;
            let Screen::Live(ref live) = *screen else {
                return Err(Rejection::WrongScreen);
            };
            let product = live
                .listing()
                .featured()
                .ok_or(Rejection::NothingToCapture)?;
            cart.capture(product, live.host(), Utc::now());
            info!("Captured {} from {}", product.name(), live.stream_id());
            Ok(())
        })
    }

    pub(crate) fn remove_cart_item(&mut self, index: usize) -> Transition {
        let cart = &mut self.cart;
        apply(&mut self.state, |user, screen| {
            require_role(user, Role::Viewer)?;
            let Screen::Cart = *screen else {
                return Err(Rejection::WrongScreen);
            };
            cart.remove(index)
                .map(drop)
                .ok_or(Rejection::NoSuchItem(index))
        })
    }
}
