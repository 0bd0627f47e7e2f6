use crate::clients::actor_client::ActorClient;
use crate::desk_actor::{DeskError, DeskEvent, DeskOutcome, KeyPress, OrderDesk};
use crate::framework::{FrameworkError, StateClient};
use crate::model::{ItemKey, LineId};
use crate::view::DeskView;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Desk actor.
///
/// One method per control on the widget. Each sends a single [`DeskEvent`]
/// and returns what the desk did with it.
#[derive(Clone)]
pub struct DeskClient {
    inner: StateClient<OrderDesk>,
}

impl DeskClient {
    pub fn new(inner: StateClient<OrderDesk>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, text))]
    pub async fn update_name_draft(&self, text: impl Into<String> + Send) -> Result<DeskOutcome, DeskError> {
        self.dispatch(DeskEvent::EditName(text.into())).await
    }

    #[instrument(skip(self))]
    pub async fn confirm_name(&self) -> Result<DeskOutcome, DeskError> {
        self.dispatch(DeskEvent::ConfirmName).await
    }

    #[instrument(skip(self))]
    pub async fn press_name_key(&self, key: KeyPress) -> Result<DeskOutcome, DeskError> {
        self.dispatch(DeskEvent::NameFieldKey(key)).await
    }

    #[instrument(skip(self))]
    pub async fn select_item(&self, key: Option<ItemKey>) -> Result<DeskOutcome, DeskError> {
        self.dispatch(DeskEvent::SelectItem(key)).await
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(&self, input: &str) -> Result<DeskOutcome, DeskError> {
        self.dispatch(DeskEvent::SetQuantity(input.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn add_to_order(&self) -> Result<DeskOutcome, DeskError> {
        self.dispatch(DeskEvent::AddToOrder).await
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, id: LineId) -> Result<DeskOutcome, DeskError> {
        self.dispatch(DeskEvent::RemoveLine(id)).await
    }

    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<DeskView, DeskError> {
        debug!("Fetching view");
        self.render().await
    }
}

#[async_trait]
impl ActorClient<OrderDesk> for DeskClient {
    type Error = DeskError;

    fn inner(&self) -> &StateClient<OrderDesk> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DeskError::ActorCommunicationError(e.to_string())
    }
}
