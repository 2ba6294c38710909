//! Component style builders

pub mod button;
pub mod card;
pub mod input;
pub mod modal;
pub mod showcase;
pub mod text;

mod shared;

pub use button::{Button, ButtonGroup, ButtonSize, ButtonVariant, LinkButton};
pub use card::{Card, CardPart, CardSize, CardVariant};
pub use input::{
    FormField, Input, InputGroup, InputSize, InputVariant, PasswordInput, PasswordToggleIcon,
    SearchInput,
};
pub use modal::{Modal, ModalEvent, ModalSize};
pub use showcase::{ArticleCard, CommunityCard, FeatureCard, StatsCard};
pub use text::{Text, TextStyle};
