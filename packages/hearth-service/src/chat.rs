use hearth_domain::intent::QueryIntent;

use crate::{
	HearthService, RETRIEVAL_LIMIT, SUGGESTION_LIMIT, ServiceError, ServiceResult, prompt,
	search::ListingSummary,
};

/// Shown when any stage of the pipeline fails. The failure detail is logged,
/// not echoed back to the user.
pub const APOLOGY_MESSAGE: &str =
	"I apologize, but I encountered an error processing your request. Please try again.";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatMessageRequest {
	pub message: String,
	pub context: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
	pub response: String,
	pub suggested_properties: Vec<ListingSummary>,
	pub success: bool,
}

impl HearthService {
	/// Retrieval-augmented chat: retrieve inventory context, compose the
	/// system prompt, call the generation endpoint, and package the reply
	/// with suggestion cards re-derived from the store. The caller always
	/// receives a well-formed result; pipeline failures become
	/// `success: false` with an apologetic message. Only a blank message is
	/// an error, rejected before any downstream work.
	pub async fn process_message(
		&self,
		req: ChatMessageRequest,
	) -> ServiceResult<ChatMessageResponse> {
		if req.message.trim().is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "Message cannot be empty.".to_string(),
			});
		}

		let intent = QueryIntent::derive(&req.message);

		match self.run_pipeline(&req.message, intent).await {
			Ok(response) => Ok(response),
			Err(err) => {
				tracing::error!(error = %err, "Chatbot pipeline failed.");

				Ok(ChatMessageResponse {
					response: APOLOGY_MESSAGE.to_string(),
					suggested_properties: Vec::new(),
					success: false,
				})
			},
		}
	}

	async fn run_pipeline(
		&self,
		message: &str,
		intent: QueryIntent,
	) -> ServiceResult<ChatMessageResponse> {
		let context = self.retrieve_context(intent).await?;
		let system_prompt = prompt::compose(&context.snapshot);
		let suggestion_query = intent.to_query(RETRIEVAL_LIMIT);

		// The suggestion cards are re-derived from the store with the same
		// heuristic query, never parsed out of the generated text. Generation
		// does not depend on them, so the two run concurrently.
		let (generated, suggestions) = tokio::join!(
			self.providers.chat.complete(&self.cfg.providers.chat, &system_prompt, message),
			self.store.find_active(&suggestion_query),
		);
		let generated = generated?;
		let suggestions = suggestions?;

		Ok(ChatMessageResponse {
			response: generated,
			suggested_properties: suggestions
				.iter()
				.take(SUGGESTION_LIMIT)
				.map(ListingSummary::from_record)
				.collect(),
			success: true,
		})
	}
}
