// Services Module
// This module contains the business services used by the API handlers
